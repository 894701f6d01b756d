// Regression checks for parsed CIS excited-state records

pub mod app;
pub mod checks;
pub mod config;
pub mod fixtures;
pub mod io;
pub mod record;

pub use app::{RecordLoader, RecordRegistry, RegressionApplication, RunSummary, YamlRecordLoader};
pub use checks::{CheckFailure, CheckKind, CheckOutcome, Tolerances};
pub use record::{Excitation, ParsedRecord, Program, StateKind};
