#[cfg(test)]
mod tests {
    use super::super::{Args, Config, Suite, DEFAULT_DATA_DIR};
    use crate::checks::Tolerances;
    use crate::fixtures::ReferenceSystem;
    use crate::record::Program;
    use clap::Parser;

    #[test]
    fn test_empty_config_uses_builtin_suites() {
        let config = serde_yml::from_str::<Config>("{}").unwrap().with_defaults();
        assert_eq!(config.data_dir.as_deref(), Some(DEFAULT_DATA_DIR));
        assert_eq!(config.tolerances(), Tolerances::default());

        let suites = config.selected_suites(&Args::default());
        assert_eq!(suites, Suite::builtin());
        assert_eq!(
            suites.iter().map(|s| s.nstates).collect::<Vec<_>>(),
            vec![10, 10, 5]
        );
    }

    #[test]
    fn test_partial_tolerances_keep_defaults() {
        let yaml = "tolerances:\n  energy: 25.0\n";
        let config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        let tolerances = config.tolerances();
        assert_eq!(tolerances.energy, 25.0);
        assert_eq!(tolerances.coefficient, 0.0005);
    }

    #[test]
    fn test_suite_list_from_yaml() {
        let yaml = r#"
data_dir: records
suites:
  - program: jaguar
    directory: basicJaguar6.5
    file: water_cis.out
    nstates: 5
  - program: GAMESS
    directory: basicGAMESS-US
    file: water_cis.out
    nstates: 10
    reference: none
"#;
        let config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        let suites = config.selected_suites(&Args::default());
        assert_eq!(suites.len(), 2);
        assert_eq!(suites[0].program, Program::Jaguar);
        assert_eq!(suites[0].reference, ReferenceSystem::WaterSto3g);
        assert_eq!(suites[1].program, Program::Gamess);
        assert_eq!(suites[1].reference, ReferenceSystem::None);
        assert_eq!(config.data_dir(&Args::default()), "records");
    }

    #[test]
    fn test_command_line_overrides() {
        let args = Args::parse_from([
            "cis_regress",
            "--data-dir",
            "elsewhere",
            "--only",
            "jaguar",
            "--only",
            "Gaussian",
            "--strict",
        ]);
        assert!(args.strict);
        assert!(args.config_file.is_none());

        let config = Config::default().with_defaults();
        assert_eq!(config.data_dir(&args), "elsewhere");

        let programs: Vec<Program> = config
            .selected_suites(&args)
            .into_iter()
            .map(|s| s.program)
            .collect();
        assert_eq!(programs, vec![Program::Gaussian, Program::Jaguar]);
    }

    #[test]
    fn test_unknown_program_is_rejected() {
        assert!(Args::try_parse_from(["cis_regress", "--only", "orca"]).is_err());
        assert!(serde_yml::from_str::<Config>(
            "suites:\n  - program: orca\n    directory: x\n    file: y\n    nstates: 1\n"
        )
        .is_err());
    }
}
