//! Configuration management for regression runs
//!
//! This module handles the suite list, record location and tolerances, with
//! defaults that reproduce the standard water/STO-3G CIS comparison.

mod args;
mod tests;

pub use args::Args;

use crate::checks::Tolerances;
use crate::fixtures::ReferenceSystem;
use crate::record::Program;
use serde::{Deserialize, Serialize};

/// Root directory of parsed records when nothing else is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub data_dir: Option<String>,
    pub tolerances: Option<ToleranceParams>,
    pub suites: Option<Vec<Suite>>,
}

/// One program's record and what to check it against
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Suite {
    pub program: Program,
    /// Test directory the record lives in, below the data directory
    pub directory: String,
    /// Name of the program output the record was parsed from
    pub file: String,
    /// Number of excited states the calculation requested
    pub nstates: usize,
    #[serde(default)]
    pub reference: ReferenceSystem,
}

impl Suite {
    pub fn new(program: Program, directory: &str, file: &str, nstates: usize) -> Self {
        Suite {
            program,
            directory: directory.to_string(),
            file: file.to_string(),
            nstates,
            reference: ReferenceSystem::default(),
        }
    }

    /// Gaussian 03, GAMESS-US and Jaguar 6.5 CIS runs on water
    pub fn builtin() -> Vec<Suite> {
        vec![
            Suite::new(Program::Gaussian, "basicGaussian03", "water_cis.log", 10),
            Suite::new(Program::Gamess, "basicGAMESS-US", "water_cis.out", 10),
            Suite::new(Program::Jaguar, "basicJaguar6.5", "water_cis.out", 5),
        ]
    }
}

/// Tolerance parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToleranceParams {
    pub energy: Option<f64>,
    pub coefficient: Option<f64>,
}

impl Default for ToleranceParams {
    fn default() -> Self {
        let defaults = Tolerances::default();
        ToleranceParams {
            energy: Some(defaults.energy),
            coefficient: Some(defaults.coefficient),
        }
    }
}

impl ToleranceParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.energy.is_none() {
            self.energy = defaults.energy;
        }
        if self.coefficient.is_none() {
            self.coefficient = defaults.coefficient;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.data_dir.is_none() {
            self.data_dir = Some(DEFAULT_DATA_DIR.to_string());
        }
        self.tolerances = Some(self.tolerances.take().unwrap_or_default().with_defaults());
        if self.suites.is_none() {
            self.suites = Some(Suite::builtin());
        }
        self
    }

    /// Get the record root, command-line override first
    pub fn data_dir(&self, args: &Args) -> String {
        args.data_dir
            .clone()
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
    }

    /// Get the tolerances
    pub fn tolerances(&self) -> Tolerances {
        let defaults = Tolerances::default();
        let params = self.tolerances.as_ref();
        Tolerances {
            energy: params.and_then(|t| t.energy).unwrap_or(defaults.energy),
            coefficient: params
                .and_then(|t| t.coefficient)
                .unwrap_or(defaults.coefficient),
        }
    }

    /// Get the suites to run, restricted to `--only` programs when given
    pub fn selected_suites(&self, args: &Args) -> Vec<Suite> {
        let suites = self.suites.clone().unwrap_or_else(Suite::builtin);
        if args.only.is_empty() {
            return suites;
        }
        suites
            .into_iter()
            .filter(|suite| args.only.contains(&suite.program))
            .collect()
    }
}
