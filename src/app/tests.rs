//! Tests for the suite runner, record registry and report

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::checks::{CheckFailure, CheckKind, CheckOutcome, Tolerances};
    use crate::config::Suite;
    use crate::fixtures::ReferenceSystem;
    use crate::record::{Excitation, ParsedRecord, Program};
    use color_eyre::eyre::{eyre, Result};
    use std::cell::Cell;

    /// Loader that hands out one fixed record and counts how often it is asked
    struct CountingLoader {
        record: ParsedRecord,
        calls: Cell<usize>,
    }

    impl RecordLoader for CountingLoader {
        fn load(&self, program: Program, _directory: &str, _file: &str) -> Result<ParsedRecord> {
            self.calls.set(self.calls.get() + 1);
            if program == Program::Jaguar {
                return Err(eyre!("no Jaguar output available"));
            }
            Ok(self.record.clone())
        }
    }

    /// Singlet-only record in the shape Jaguar reports
    fn singlet_record() -> ParsedRecord {
        ParsedRecord {
            etenergies: vec![98621.40, 114913.05, 127951.88, 146486.30, 165341.72],
            etsecs: vec![
                vec![Excitation::new(4, 5, -0.70711)],
                vec![Excitation::new(4, 6, -0.70711)],
                vec![Excitation::new(3, 5, 0.68369)],
                vec![Excitation::new(2, 5, 0.31164), Excitation::new(3, 6, -0.63472)],
                vec![Excitation::new(2, 5, -0.62841), Excitation::new(3, 6, -0.32580)],
            ],
            etsyms: vec![
                "Singlet-B1".to_string(),
                "Singlet-A2".to_string(),
                "Singlet-A1".to_string(),
                "Singlet-B2".to_string(),
                "Singlet-A1".to_string(),
            ],
        }
    }

    #[test]
    fn test_registry_loads_each_record_once() {
        let loader = CountingLoader {
            record: singlet_record(),
            calls: Cell::new(0),
        };
        let mut registry = RecordRegistry::new(loader);
        assert!(registry.is_empty());

        for _ in 0..3 {
            let record = registry.load(Program::Gaussian, "dir", "out.log").unwrap();
            assert_eq!(record.etenergies.len(), 5);
        }
        registry.load(Program::Gamess, "dir", "out.log").unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.loader().calls.get(), 2);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let loader = CountingLoader {
            record: singlet_record(),
            calls: Cell::new(0),
        };
        let mut registry = RecordRegistry::new(loader);
        assert!(registry.load(Program::Jaguar, "dir", "out").is_err());
        assert!(registry.load(Program::Jaguar, "dir", "out").is_err());
        assert!(registry.is_empty());
        assert_eq!(registry.loader().calls.get(), 2);
    }

    #[test]
    fn test_suite_passes_without_triplets() {
        let suite = Suite::new(Program::Jaguar, "basicJaguar6.5", "water_cis.out", 5);
        let record = singlet_record();
        let result = run_suite(&suite, Ok(&record), &Tolerances::default());

        assert_eq!(result.tests_run(), 4);
        assert!(result.was_successful());
        assert_eq!(
            result.checks.iter().map(|c| c.kind).collect::<Vec<_>>(),
            CheckKind::plan(true)
        );
    }

    #[test]
    fn test_failures_do_not_stop_remaining_checks() {
        let suite = Suite::new(Program::Gaussian, "basicGaussian03", "water_cis.log", 6);
        let mut record = singlet_record();
        record.etsecs[0][0].coefficient = -0.69;

        let result = run_suite(&suite, Ok(&record), &Tolerances::default());
        assert_eq!(result.tests_run(), 4);
        assert_eq!(result.failures(), 2);
        assert_eq!(result.errors(), 0);
        assert!(matches!(
            result.checks[0].outcome,
            CheckOutcome::Failed(CheckFailure::LengthMismatch { .. })
        ));
        assert!(result.checks[1].outcome.is_pass());
        assert!(result.checks[2].outcome.is_pass());
        assert!(matches!(
            result.checks[3].outcome,
            CheckOutcome::Failed(CheckFailure::ToleranceExceeded { .. })
        ));
    }

    #[test]
    fn test_missing_record_errors_every_check() {
        let suite = Suite::new(Program::Jaguar, "basicJaguar6.5", "water_cis.out", 5);
        let result = run_suite(&suite, Err(eyre!("file not found")), &Tolerances::default());
        assert_eq!(result.tests_run(), 4);
        assert_eq!(result.errors(), 4);
        assert_eq!(result.failures(), 0);
        assert_eq!(
            result.checks[0].outcome,
            CheckOutcome::Errored("file not found".to_string())
        );
    }

    #[test]
    fn test_suite_without_reference_runs_generic_checks() {
        let mut suite = Suite::new(Program::Gamess, "basicGAMESS-US", "water_cis.out", 5);
        suite.reference = ReferenceSystem::None;
        let mut record = singlet_record();
        // would fail the reference comparison
        record.etenergies[0] = 1000.0;

        let result = run_suite(&suite, Ok(&record), &Tolerances::default());
        assert_eq!(result.tests_run(), 2);
        assert!(result.was_successful());
    }

    #[test]
    fn test_summary_counts() {
        let passed = SuiteResult {
            program: Program::Gaussian,
            checks: vec![CheckResult {
                kind: CheckKind::StateCount,
                outcome: CheckOutcome::Passed,
            }],
        };
        let mixed = SuiteResult {
            program: Program::Gamess,
            checks: vec![
                CheckResult {
                    kind: CheckKind::StateCount,
                    outcome: CheckOutcome::Errored("boom".to_string()),
                },
                CheckResult {
                    kind: CheckKind::EnergiesAscending,
                    outcome: CheckOutcome::Failed(CheckFailure::LengthMismatch {
                        field: crate::checks::RecordField::Energies,
                        expected: 1,
                        found: 0,
                    }),
                },
                CheckResult {
                    kind: CheckKind::EnergyValues,
                    outcome: CheckOutcome::Passed,
                },
            ],
        };

        let summary = RunSummary::from_results(&[passed, mixed]);
        assert_eq!(
            summary,
            RunSummary {
                total: 4,
                passed: 2,
                failed: 1,
                errors: 1,
            }
        );
        assert!(!summary.all_passed());
        assert!(RunSummary::from_results(&[]).all_passed());
    }

    #[test]
    fn test_report_format() {
        let suite = Suite::new(Program::Gamess, "basicGAMESS-US", "water_cis.out", 5);
        let mut record = singlet_record();
        record.etsyms.pop();
        let result = run_suite(&suite, Ok(&record), &Tolerances::default());

        let mut buffer = Vec::new();
        report_suite(&mut buffer, &result).unwrap();
        report_summary(&mut buffer, &RunSummary::from_results(&[result])).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let expected = "\n**** Testing GAMESS ****\n\
            state_count (GAMESS) ... FAIL: etsyms holds 4 entries, expected 5\n\
            energies_ascending (GAMESS) ... ok\n\
            energy_values (GAMESS) ... ok\n\
            assignment_values (GAMESS) ... ok\n\
            Ran 4 checks\n\
            FAILED (failures=1, errors=0)\n\
            \n\n********* SUMMARY OF CI TEST **************\n\
            TOTAL: 4\tPASSED: 3\tFAILED: 1\tERRORS: 0\n";
        assert_eq!(text, expected);
    }
}
