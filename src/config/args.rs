//! Command-line argument parsing for the regression run

use crate::record::Program;
use clap::Parser;

/// Check parsed CIS excited-state records against reference values
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a YAML configuration file (built-in suites when omitted)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override the directory holding parsed records
    #[arg(short, long)]
    pub data_dir: Option<String>,

    /// Override log output file: (default stderr)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Only run the suites for this program (repeatable)
    #[arg(long, value_parser = clap::value_parser!(Program))]
    pub only: Vec<Program>,

    /// Exit with an error status when any check fails or errors
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
