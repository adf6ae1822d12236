//! Execution driver.
//!
//! Runs a probe in whatever tier the engine currently has for it and records
//! the observable outcome. The driver invokes the body exactly once per call
//! and never retries: side effects are the probe's own responsibility and
//! must reproduce identically regardless of tier.

use crate::registry::{ProbeCase, StressCase};
use harness_types::{ExecutionOutcome, Value};

/// Runs probe bodies and captures outcomes.
///
/// A thrown probe error becomes [`ExecutionOutcome::Threw`]; the original
/// error object never leaks past the descriptor. Faults in the harness's
/// own plumbing (an unknown probe id, an empty shape sequence) are not
/// outcomes and are surfaced separately as
/// [`HarnessError`](crate::HarnessError).
#[derive(Debug, Default)]
pub struct ExecutionDriver;

impl ExecutionDriver {
    /// Creates a driver.
    pub fn new() -> Self {
        Self
    }

    /// Invokes the probe body exactly once and records what it did.
    pub fn run(&self, case: &ProbeCase) -> ExecutionOutcome {
        match case.invoke() {
            Ok(value) => ExecutionOutcome::Return(value),
            Err(descriptor) => ExecutionOutcome::Threw(descriptor),
        }
    }

    /// Invokes a shaped probe body exactly once with the given input.
    pub fn run_shaped(&self, case: &StressCase, input: &Value) -> ExecutionOutcome {
        match case.invoke(input) {
            Ok(value) => ExecutionOutcome::Return(value),
            Err(descriptor) => ExecutionOutcome::Threw(descriptor),
        }
    }
}
