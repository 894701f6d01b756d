mod records;
mod report;
mod runner;
mod tests;

pub use records::{RecordLoader, RecordRegistry, YamlRecordLoader};
pub use report::{report_suite, report_summary};
pub use runner::{run_suite, run_suites, CheckResult, RunSummary, SuiteResult};

use crate::config::{Args, Config};
use crate::io::setup_output;
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs;
use std::io::Write;
use tracing::info;

pub struct RegressionApplication {
    args: Args,
    config: Config,
}

impl RegressionApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        Self::new(args)
    }

    pub fn new(args: Args) -> Result<Self> {
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref(), self.args.verbose)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let summary = self.run_with_writer(&mut out)?;
        out.flush()?;

        if self.args.strict && !summary.all_passed() {
            return Err(eyre!(
                "{} checks failed and {} errored",
                summary.failed,
                summary.errors
            ));
        }
        Ok(())
    }

    /// Run every selected suite, writing the report to `writer`
    pub fn run_with_writer<W: Write>(&self, writer: &mut W) -> Result<RunSummary> {
        let data_dir = self.config.data_dir(&self.args);
        let tolerances = self.config.tolerances();
        let suites = self.config.selected_suites(&self.args);
        info!(
            "Running {} suites from {} (energy tolerance {} cm-1, coefficient tolerance {})",
            suites.len(),
            data_dir,
            tolerances.energy,
            tolerances.coefficient
        );

        let mut registry = RecordRegistry::new(YamlRecordLoader::new(data_dir));
        let results = run_suites(&suites, &mut registry, &tolerances);
        for result in &results {
            report_suite(writer, result)?;
        }

        let summary = RunSummary::from_results(&results);
        report_summary(writer, &summary)?;
        info!("{} of {} checks passed", summary.passed, summary.total);
        Ok(summary)
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = &args.config_file else {
        return Ok(Config::default().with_defaults());
    };

    info!("Reading configuration from: {}", path);
    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    // empty or comment-only files hold no document and load as null
    let config = serde_yml::from_str::<Option<Config>>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .unwrap_or_default()
        .with_defaults();

    Ok(config)
}
