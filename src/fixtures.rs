//! Reference excited-state data
//!
//! Values come from the GAMESS CIS(RHF) water/STO-3G run. Only assignment
//! coefficients with magnitude above 0.1 are listed, since not every program
//! prints the smaller contributions.

use crate::record::{Excitation, StateKind};
use serde::{Deserialize, Serialize};

/// Number of leading states of each kind compared against a fixture
pub const COMPARED_STATES: usize = 4;

/// Known-good energies and assignments for one chemical system
#[derive(Debug)]
pub struct ReferenceFixture {
    pub name: &'static str,
    /// First singlet excitation energies [cm^-1]
    pub singlet_energies: [f64; COMPARED_STATES],
    /// First triplet excitation energies [cm^-1]
    pub triplet_energies: [f64; COMPARED_STATES],
    /// Leading singlet assignments; triplet assignments are not compared
    pub singlet_assignments: [&'static [Excitation]; COMPARED_STATES],
}

impl ReferenceFixture {
    pub fn energies(&self, kind: StateKind) -> &[f64; COMPARED_STATES] {
        match kind {
            StateKind::Singlet => &self.singlet_energies,
            StateKind::Triplet => &self.triplet_energies,
        }
    }
}

pub static WATER_STO3G: ReferenceFixture = ReferenceFixture {
    name: "water-sto3g",
    singlet_energies: [98614.56, 114906.59, 127948.12, 146480.64],
    triplet_energies: [82085.34, 98999.11, 104077.89, 113978.37],
    singlet_assignments: [
        &[Excitation::new(4, 5, -0.70710678)],
        &[Excitation::new(4, 6, -0.70710678)],
        &[Excitation::new(3, 5, 0.68368723)],
        &[
            Excitation::new(2, 5, 0.31163855),
            Excitation::new(3, 6, -0.63471970),
        ],
    ],
};

/// Reference system a suite is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceSystem {
    #[default]
    #[serde(alias = "water")]
    WaterSto3g,
    /// Only the generic state-count and ordering checks run
    None,
}

impl ReferenceSystem {
    pub fn fixture(self) -> Option<&'static ReferenceFixture> {
        match self {
            ReferenceSystem::WaterSto3g => Some(&WATER_STO3G),
            ReferenceSystem::None => None,
        }
    }
}
