use crate::app::runner::{RunSummary, SuiteResult};
use crate::checks::CheckOutcome;
use color_eyre::eyre::Result;
use std::io::Write;

/// Print one suite's header, a line per check and the suite verdict
pub fn report_suite<W: Write>(writer: &mut W, result: &SuiteResult) -> Result<()> {
    writeln!(writer, "\n**** Testing {} ****", result.program)?;
    for check in &result.checks {
        let status = match &check.outcome {
            CheckOutcome::Passed => "ok".to_string(),
            CheckOutcome::Failed(failure) => format!("FAIL: {}", failure),
            CheckOutcome::Errored(message) => format!("ERROR: {}", message),
        };
        writeln!(writer, "{} ({}) ... {}", check.kind, result.program, status)?;
    }

    writeln!(writer, "Ran {} checks", result.tests_run())?;
    if result.was_successful() {
        writeln!(writer, "OK")?;
    } else {
        writeln!(
            writer,
            "FAILED (failures={}, errors={})",
            result.failures(),
            result.errors()
        )?;
    }
    Ok(())
}

/// Print the run-wide totals
pub fn report_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> Result<()> {
    writeln!(writer, "\n\n********* SUMMARY OF CI TEST **************")?;
    writeln!(
        writer,
        "TOTAL: {}\tPASSED: {}\tFAILED: {}\tERRORS: {}",
        summary.total, summary.passed, summary.failed, summary.errors
    )?;
    Ok(())
}
