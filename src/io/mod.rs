//! Input/Output operations for regression runs
//!
//! This module handles logging setup and reading parsed records from disk.

mod output;
mod record_loader;

pub use output::setup_output;
pub use record_loader::{fetch_record, record_path};
