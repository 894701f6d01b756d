//! Parsed excited-state records
//!
//! A record is what a program-specific output parser hands back for one CIS
//! calculation: the excitation energies, the orbital assignments of every
//! state and the state symmetry labels, all in state order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum-chemistry program that produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    Gaussian,
    #[serde(alias = "GAMESS", alias = "gamess-us")]
    Gamess,
    Jaguar,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Program::Gaussian => write!(f, "Gaussian"),
            Program::Gamess => write!(f, "GAMESS"),
            Program::Jaguar => write!(f, "Jaguar"),
        }
    }
}

impl std::str::FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gaussian" => Ok(Program::Gaussian),
            "gamess" | "gamess-us" => Ok(Program::Gamess),
            "jaguar" => Ok(Program::Jaguar),
            other => Err(format!(
                "unknown program '{}' (expected gaussian, gamess or jaguar)",
                other
            )),
        }
    }
}

/// Spin multiplicity class of an excited state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Singlet,
    Triplet,
}

impl StateKind {
    /// Classify a symmetry label by its leading marker (`S...` or `T...`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.chars().next() {
            Some('S') => Some(StateKind::Singlet),
            Some('T') => Some(StateKind::Triplet),
            _ => None,
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Singlet => write!(f, "singlet"),
            StateKind::Triplet => write!(f, "triplet"),
        }
    }
}

/// One orbital transition contributing to an excited state.
///
/// Serialized as `[from, to, coefficient]`; orbital indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(from = "(usize, usize, f64)", into = "(usize, usize, f64)")]
pub struct Excitation {
    pub from: usize,
    pub to: usize,
    pub coefficient: f64,
}

impl Excitation {
    pub const fn new(from: usize, to: usize, coefficient: f64) -> Self {
        Excitation {
            from,
            to,
            coefficient,
        }
    }

    pub fn same_pair(&self, other: &Excitation) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl From<(usize, usize, f64)> for Excitation {
    fn from((from, to, coefficient): (usize, usize, f64)) -> Self {
        Excitation::new(from, to, coefficient)
    }
}

impl From<Excitation> for (usize, usize, f64) {
    fn from(exc: Excitation) -> Self {
        (exc.from, exc.to, exc.coefficient)
    }
}

/// Excited-state data as produced by a parser
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ParsedRecord {
    /// Excitation energies in cm^-1, one per state
    #[serde(default)]
    pub etenergies: Vec<f64>,
    /// Orbital assignments, one list per state
    #[serde(default)]
    pub etsecs: Vec<Vec<Excitation>>,
    /// Symmetry labels, one per state
    #[serde(default)]
    pub etsyms: Vec<String>,
}

impl ParsedRecord {
    /// Indices of the states whose label marks them as `kind`, in state order
    pub fn state_indices(&self, kind: StateKind) -> Vec<usize> {
        self.etsyms
            .iter()
            .enumerate()
            .filter(|(_, label)| StateKind::from_label(label) == Some(kind))
            .map(|(i, _)| i)
            .collect()
    }
}
