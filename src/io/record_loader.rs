//! Parsed record loading utilities

use crate::record::ParsedRecord;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the serialized record for `file` in test directory `directory`
pub fn record_path(data_dir: &Path, directory: &str, file: &str) -> PathBuf {
    data_dir.join(directory).join(format!("{}.yaml", file))
}

/// Read a parsed record from the data directory
pub fn fetch_record(data_dir: &Path, directory: &str, file: &str) -> Result<ParsedRecord> {
    let path = record_path(data_dir, directory, file);
    debug!("Loading parsed record from {}", path.display());

    let content = fs::read_to_string(&path)
        .wrap_err_with(|| format!("Unable to read parsed record: {}", path.display()))?;
    serde_yml::from_str::<ParsedRecord>(&content)
        .wrap_err_with(|| format!("Failed to parse record file: {}", path.display()))
}
