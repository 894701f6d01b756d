//! CIS Regression Command-Line Interface
//!
//! Checks parsed excited-state records from Gaussian, GAMESS and Jaguar
//! against reference water/STO-3G values and prints a pass/fail summary.

use cis_regress::RegressionApplication;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    RegressionApplication::from_cli()?.run()
}
