//! Harness orchestrator.
//!
//! Runs cases sequentially against one compile service. Per probe case the
//! ordering is fixed and load-bearing for the oracle's tier diagnosis:
//! baseline execution completes before compilation is requested, and
//! compilation completion precedes the compiled-tier execution.

use crate::controller::{CompilationController, CompileState};
use crate::driver::ExecutionDriver;
use crate::oracle::{self, Verdict};
use crate::registry::{ProbeCase, ProbeRegistry, StressCase};
use crate::report::{CaseReport, ReportSink, RunReport};
use crate::stress::{self, StressDriver};
use engine_bridge::CompileService;
use harness_types::{ErrorDescriptor, ErrorKind, ExecutionOutcome};
use std::fmt;
use std::time::Duration;

/// Harness plumbing faults, distinct from anything a probe does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// No case registered under this id.
    UnknownProbe(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarnessError::UnknownProbe(id) => write!(f, "no probe registered under id: {}", id),
        }
    }
}

impl std::error::Error for HarnessError {}

/// Timing configuration for a harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Upper bound on one case's compilation wait.
    pub wait_timeout: Duration,
    /// Sleep slice between completion polls.
    pub poll_interval: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_millis(10_000),
            poll_interval: Duration::from_millis(1),
        }
    }
}

/// Differential tiering harness over one compile service.
///
/// A single logical worker processes cases sequentially; the only
/// suspension point is the compilation wait. No case's side effects are
/// shared with another case.
pub struct DiffHarness<S: CompileService> {
    service: S,
    config: HarnessConfig,
}

impl<S: CompileService> DiffHarness<S> {
    /// Creates a harness with default timing (10 s wait timeout).
    pub fn new(service: S) -> Self {
        Self {
            service,
            config: HarnessConfig::default(),
        }
    }

    /// Creates a harness with explicit timing.
    pub fn with_config(service: S, config: HarnessConfig) -> Self {
        Self { service, config }
    }

    /// The configured timing.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs one probe case through both tiers and produces its report.
    pub fn run_case(&self, case: &ProbeCase) -> CaseReport {
        let driver = ExecutionDriver::new();
        let baseline = driver.run(case);

        let controller =
            CompilationController::new(&self.service).with_poll_interval(self.config.poll_interval);
        let handle = controller.request_compile(case.id());
        let handle = controller.await_completion(handle, self.config.wait_timeout);

        match handle.state() {
            CompileState::Compiled => {
                let compiled = driver.run(case);
                let comparison = oracle::compare(&baseline, &compiled, case.expected());
                CaseReport {
                    probe_id: case.id().to_string(),
                    baseline,
                    compiled: Some(compiled),
                    tiered_up: handle.tiered_up(),
                    verdict: comparison.verdict,
                    diagnostic: comparison.diagnostic,
                }
            }
            CompileState::TimedOut => CaseReport {
                probe_id: case.id().to_string(),
                baseline,
                compiled: None,
                tiered_up: false,
                verdict: Verdict::Error,
                diagnostic: Some(format!(
                    "compilation wait timed out after {:?}",
                    self.config.wait_timeout
                )),
            },
            CompileState::Failed => CaseReport {
                probe_id: case.id().to_string(),
                baseline,
                compiled: None,
                tiered_up: false,
                verdict: Verdict::Error,
                diagnostic: Some("compilation abandoned before completion".to_string()),
            },
            CompileState::Pending => CaseReport {
                probe_id: case.id().to_string(),
                baseline,
                compiled: None,
                tiered_up: false,
                verdict: Verdict::Error,
                diagnostic: Some("controller returned a non-terminal handle".to_string()),
            },
        }
    }

    /// Runs one inline-cache stress case and produces its report.
    ///
    /// The first outcome in the sequence is the report's baseline and the
    /// last is its compiled-tier counterpart; the verdict covers every
    /// outcome pairwise.
    pub fn run_stress_case(&self, case: &StressCase) -> CaseReport {
        let outcomes = StressDriver::new().stress(case);

        let (Some(first), Some(last)) = (outcomes.first(), outcomes.last()) else {
            return CaseReport {
                probe_id: case.id().to_string(),
                baseline: ExecutionOutcome::Threw(ErrorDescriptor::new(
                    ErrorKind::InternalError,
                    "empty shape sequence",
                )),
                compiled: None,
                tiered_up: false,
                verdict: Verdict::Error,
                diagnostic: Some("stress case has an empty shape sequence".to_string()),
            };
        };

        let comparison = stress::verify(&outcomes);
        CaseReport {
            probe_id: case.id().to_string(),
            baseline: first.outcome.clone(),
            compiled: Some(last.outcome.clone()),
            tiered_up: false,
            verdict: comparison.verdict,
            diagnostic: comparison.diagnostic,
        }
    }

    /// Runs one probe case by id; an unknown id is a harness fault, not a
    /// probe failure.
    pub fn run_case_by_id(&self, registry: &ProbeRegistry, id: &str) -> CaseReport {
        match registry.get(id) {
            Some(case) => self.run_case(case),
            None => CaseReport {
                probe_id: id.to_string(),
                baseline: ExecutionOutcome::Threw(ErrorDescriptor::new(
                    ErrorKind::InternalError,
                    "probe not found",
                )),
                compiled: None,
                tiered_up: false,
                verdict: Verdict::Error,
                diagnostic: Some(HarnessError::UnknownProbe(id.to_string()).to_string()),
            },
        }
    }

    /// Runs every registered case sequentially and aggregates the reports.
    ///
    /// No single case failure aborts the run.
    pub fn run_all(&self, registry: &ProbeRegistry) -> RunReport {
        let mut sink = ReportSink::new();
        for case in registry.cases() {
            sink.record(self.run_case(case));
        }
        for case in registry.stress_cases() {
            sink.record(self.run_stress_case(case));
        }
        sink.finalize()
    }
}
