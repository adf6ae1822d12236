//! Equivalence oracle.
//!
//! The single place where "same observable behavior" is defined. Return
//! values compare by `Value` equality (NaN-equal), thrown errors by kind
//! plus message. With a declared expected value the baseline is checked
//! first, so a mismatch diagnostic always names which tier regressed.

use crate::registry::Expectation;
use harness_types::ExecutionOutcome;
use std::fmt;

/// Per-case verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Baseline and compiled tiers agree (and match the expected value,
    /// when one was declared).
    Pass,
    /// Semantic mismatch between tiers or against the expected value.
    Fail,
    /// Harness or engine health problem (timeout, plumbing fault); the
    /// case is inconclusive, not failing.
    Error,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
            Verdict::Error => write!(f, "ERROR"),
        }
    }
}

/// Verdict plus the diff that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// The verdict.
    pub verdict: Verdict,
    /// Human-readable diff for non-Pass verdicts.
    pub diagnostic: Option<String>,
}

impl Comparison {
    /// A passing comparison.
    pub fn pass() -> Self {
        Self {
            verdict: Verdict::Pass,
            diagnostic: None,
        }
    }

    /// A failing comparison with its diff.
    pub fn fail(diagnostic: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Fail,
            diagnostic: Some(diagnostic.into()),
        }
    }

    /// Returns true for a Pass verdict.
    pub fn is_pass(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}

/// The pairwise outcome-equality rule.
///
/// Delegates to `ExecutionOutcome`'s structural equality, which in turn
/// uses the NaN-equal `Value` rule and kind+message error equality. Every
/// comparison in the harness goes through this one function.
pub fn outcomes_equal(a: &ExecutionOutcome, b: &ExecutionOutcome) -> bool {
    a == b
}

/// Compares a baseline/compiled outcome pair against an expectation.
///
/// When `expected` declares a value, the baseline is checked against it
/// before the tiers are compared to each other; the asymmetry exists only
/// so the diagnostic can name the regressing tier.
pub fn compare(
    baseline: &ExecutionOutcome,
    compiled: &ExecutionOutcome,
    expected: &Expectation,
) -> Comparison {
    if let Expectation::Value(value) = expected {
        let canonical = ExecutionOutcome::Return(value.clone());
        if !outcomes_equal(baseline, &canonical) {
            return Comparison::fail(format!(
                "baseline tier diverges from expected: expected {}, baseline {}",
                canonical, baseline
            ));
        }
    }

    if !outcomes_equal(baseline, compiled) {
        return Comparison::fail(format!(
            "compiled tier diverges from baseline: baseline {}, compiled {}",
            baseline, compiled
        ));
    }

    Comparison::pass()
}
