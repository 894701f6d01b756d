//! Regression checks over parsed CIS records
//!
//! Every check is a pure predicate over an already-loaded [`ParsedRecord`].
//! Two checks apply to any CI calculation:
//!
//! - **state_count**: `etenergies`, `etsecs` and `etsyms` all hold `nstates` entries
//! - **energies_ascending**: energies are positive and strictly rising
//!
//! and two compare against a [`ReferenceFixture`]:
//!
//! - **energy_values**: leading singlet/triplet energies within the energy tolerance
//! - **assignment_values**: leading singlet coefficients within the coefficient tolerance
//!
//! [`ParsedRecord`]: crate::record::ParsedRecord
//! [`ReferenceFixture`]: crate::fixtures::ReferenceFixture

mod checkers;

pub use checkers::{
    check_assignment_values, check_energies_ascending, check_energy_values, check_state_count,
};

use crate::record::StateKind;
use std::fmt;
use thiserror::Error;

/// Numeric tolerances applied by the reference checks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Maximum absolute energy deviation [cm^-1]
    pub energy: f64,
    /// Maximum absolute assignment-coefficient deviation
    pub coefficient: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            energy: 50.0,
            coefficient: 0.0005,
        }
    }
}

/// Identity of a single check, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    StateCount,
    EnergiesAscending,
    EnergyValues,
    AssignmentValues,
}

impl CheckKind {
    /// Checks valid for any CI record
    pub const GENERIC: [CheckKind; 2] = [CheckKind::StateCount, CheckKind::EnergiesAscending];
    /// Checks that need a reference fixture
    pub const REFERENCE: [CheckKind; 2] = [CheckKind::EnergyValues, CheckKind::AssignmentValues];

    pub fn name(self) -> &'static str {
        match self {
            CheckKind::StateCount => "state_count",
            CheckKind::EnergiesAscending => "energies_ascending",
            CheckKind::EnergyValues => "energy_values",
            CheckKind::AssignmentValues => "assignment_values",
        }
    }

    /// The checks to run, with or without a reference fixture
    pub fn plan(with_reference: bool) -> Vec<CheckKind> {
        let mut kinds = Self::GENERIC.to_vec();
        if with_reference {
            kinds.extend(Self::REFERENCE);
        }
        kinds
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Energies,
    Assignments,
    Symmetries,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordField::Energies => write!(f, "etenergies"),
            RecordField::Assignments => write!(f, "etsecs"),
            RecordField::Symmetries => write!(f, "etsyms"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderingReason {
    NotPositive { value: f64 },
    NotAscending { previous: f64, value: f64 },
}

impl fmt::Display for OrderingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingReason::NotPositive { value } => write!(f, "{} is not positive", value),
            OrderingReason::NotAscending { previous, value } => {
                write!(f, "{} does not rise above {}", value, previous)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Energy,
    Coefficient,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Energy => write!(f, "energy"),
            Quantity::Coefficient => write!(f, "coefficient"),
        }
    }
}

/// Why a check did not pass
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckFailure {
    #[error("{field} holds {found} entries, expected {expected}")]
    LengthMismatch {
        field: RecordField,
        expected: usize,
        found: usize,
    },
    #[error("etenergies[{index}]: {reason}")]
    OrderingViolation { index: usize, reason: OrderingReason },
    #[error("{kind} state {state}: {quantity} off by {delta:.6} (tolerance {tolerance})")]
    ToleranceExceeded {
        quantity: Quantity,
        kind: StateKind,
        state: usize,
        delta: f64,
        tolerance: f64,
    },
    #[error("Excitation {from}->{to} not found for {kind} state {state}")]
    AssignmentNotFound {
        kind: StateKind,
        state: usize,
        from: usize,
        to: usize,
    },
    #[error("only {found} {kind} states present, {required} required")]
    InsufficientStates {
        kind: StateKind,
        found: usize,
        required: usize,
    },
    #[error("etsyms refers to state {index} but {field} has no such entry")]
    MissingState { field: RecordField, index: usize },
}

impl CheckFailure {
    /// Whether the check could not be evaluated at all, as opposed to
    /// evaluating to a wrong answer
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            CheckFailure::InsufficientStates { .. } | CheckFailure::MissingState { .. }
        )
    }
}

/// Result of one check on one suite
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Passed,
    Failed(CheckFailure),
    Errored(String),
}

impl CheckOutcome {
    pub fn from_result(result: Result<(), CheckFailure>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Passed,
            Err(failure) if failure.is_error() => CheckOutcome::Errored(failure.to_string()),
            Err(failure) => CheckOutcome::Failed(failure),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}
