//! Per-execution outcome records.

use crate::{ErrorDescriptor, Value};
use std::fmt;

/// What one probe invocation observably did.
///
/// Produced fresh per execution and never mutated afterward. A probe either
/// returns a value or throws; harness plumbing faults are not outcomes and
/// travel on a separate error path.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// The probe returned normally with this value.
    Return(Value),
    /// The probe threw; only the descriptor is retained.
    Threw(ErrorDescriptor),
}

impl ExecutionOutcome {
    /// Returns true if the probe returned normally.
    pub fn returned(&self) -> bool {
        matches!(self, ExecutionOutcome::Return(_))
    }

    /// Returns true if the probe threw.
    pub fn threw(&self) -> bool {
        matches!(self, ExecutionOutcome::Threw(_))
    }

    /// The returned value, if the probe returned normally.
    pub fn return_value(&self) -> Option<&Value> {
        match self {
            ExecutionOutcome::Return(v) => Some(v),
            ExecutionOutcome::Threw(_) => None,
        }
    }

    /// The thrown-error descriptor, if the probe threw.
    pub fn error(&self) -> Option<&ErrorDescriptor> {
        match self {
            ExecutionOutcome::Return(_) => None,
            ExecutionOutcome::Threw(d) => Some(d),
        }
    }
}

impl fmt::Display for ExecutionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionOutcome::Return(v) => write!(f, "returned {}", v),
            ExecutionOutcome::Threw(d) => write!(f, "threw {}", d),
        }
    }
}
