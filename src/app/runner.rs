use crate::app::records::{RecordLoader, RecordRegistry};
use crate::checks::{
    check_assignment_values, check_energies_ascending, check_energy_values, check_state_count,
    CheckKind, CheckOutcome, Tolerances,
};
use crate::config::Suite;
use crate::fixtures::ReferenceFixture;
use crate::record::{ParsedRecord, Program};
use color_eyre::eyre::Result;
use tracing::{debug, info, warn};

/// Outcome of one check within a suite
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub outcome: CheckOutcome,
}

/// Outcomes of every check run against one program's record
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteResult {
    pub program: Program,
    pub checks: Vec<CheckResult>,
}

impl SuiteResult {
    pub fn tests_run(&self) -> usize {
        self.checks.len()
    }

    pub fn failures(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.outcome, CheckOutcome::Failed(_)))
            .count()
    }

    pub fn errors(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.outcome, CheckOutcome::Errored(_)))
            .count()
    }

    pub fn was_successful(&self) -> bool {
        self.checks.iter().all(|c| c.outcome.is_pass())
    }
}

/// Totals over all suites of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn from_results(results: &[SuiteResult]) -> Self {
        let mut summary = RunSummary::default();
        for result in results {
            summary.total += result.tests_run();
            summary.failed += result.failures();
            summary.errors += result.errors();
        }
        summary.passed = summary.total - (summary.failed + summary.errors);
        summary
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }
}

/// Run every applicable check of `suite` against its record.
///
/// A record that could not be loaded turns every check into an error.
pub fn run_suite(
    suite: &Suite,
    record: Result<&ParsedRecord>,
    tolerances: &Tolerances,
) -> SuiteResult {
    let reference = suite.reference.fixture();
    let plan = CheckKind::plan(reference.is_some());

    let checks = match record {
        Ok(record) => plan
            .into_iter()
            .map(|kind| {
                let outcome = run_check(kind, record, suite, reference, tolerances);
                debug!("{} ({}): {:?}", kind, suite.program, outcome);
                CheckResult { kind, outcome }
            })
            .collect(),
        Err(err) => {
            warn!("No record for {}: {:#}", suite.program, err);
            let message = format!("{:#}", err);
            plan.into_iter()
                .map(|kind| CheckResult {
                    kind,
                    outcome: CheckOutcome::Errored(message.clone()),
                })
                .collect()
        }
    };

    SuiteResult {
        program: suite.program,
        checks,
    }
}

fn run_check(
    kind: CheckKind,
    record: &ParsedRecord,
    suite: &Suite,
    reference: Option<&ReferenceFixture>,
    tolerances: &Tolerances,
) -> CheckOutcome {
    let result = match kind {
        CheckKind::StateCount => check_state_count(record, suite.nstates),
        CheckKind::EnergiesAscending => check_energies_ascending(record),
        CheckKind::EnergyValues => {
            reference.map_or(Ok(()), |r| check_energy_values(record, r, tolerances))
        }
        CheckKind::AssignmentValues => {
            reference.map_or(Ok(()), |r| check_assignment_values(record, r, tolerances))
        }
    };
    CheckOutcome::from_result(result)
}

/// Run the suites in order, loading each record through `registry`
pub fn run_suites<L: RecordLoader>(
    suites: &[Suite],
    registry: &mut RecordRegistry<L>,
    tolerances: &Tolerances,
) -> Vec<SuiteResult> {
    suites
        .iter()
        .map(|suite| {
            info!("Checking {} ({} states)", suite.program, suite.nstates);
            let record = registry.load(suite.program, &suite.directory, &suite.file);
            run_suite(suite, record, tolerances)
        })
        .collect()
}
