//! Inline-cache stress driver.
//!
//! Invokes one probe across an ordered sequence of differently-shaped
//! inputs, labeling each outcome with the cache state a property-access
//! site would be in after that call. The defect class under test is
//! "outcome changes when the cache degrades", so the verdict requires all
//! outcomes in the sequence to be pairwise equal regardless of cache state.
//!
//! The labeling is diagnostic accounting only; no inline-cache mechanism
//! lives here. The 4-entry polymorphic bound matches the engine's IC arity.

use crate::driver::ExecutionDriver;
use crate::oracle::{outcomes_equal, Comparison};
use crate::registry::StressCase;
use arrayvec::ArrayVec;
use harness_types::{ExecutionOutcome, Value};
use std::fmt;

/// Maximum distinct shapes a polymorphic cache holds before degrading.
pub const POLYMORPHIC_LIMIT: usize = 4;

/// One input shape: a label identifying the structural layout plus the
/// input value carrying it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    /// Shape label; distinct labels count as distinct layouts.
    pub label: String,
    /// The input fed to the probe for this shape.
    pub input: Value,
}

impl ShapeDescriptor {
    /// Creates a shape descriptor.
    pub fn new(label: impl Into<String>, input: Value) -> Self {
        Self {
            label: label.into(),
            input,
        }
    }
}

/// Ordered, read-only sequence of input shapes.
///
/// Sequences put monomorphic shapes first and introduce layout changes
/// later to force the polymorphic and megamorphic cache states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeSequence {
    shapes: Vec<ShapeDescriptor>,
}

impl ShapeSequence {
    /// Creates a sequence from descriptors, preserving order.
    pub fn new(shapes: Vec<ShapeDescriptor>) -> Self {
        Self { shapes }
    }

    /// The descriptors in sequence order.
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    /// Number of shapes in the sequence.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true for an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Inline-cache state classification after a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Single shape observed.
    Monomorphic,
    /// Two to [`POLYMORPHIC_LIMIT`] distinct shapes observed.
    Polymorphic,
    /// More distinct shapes than the polymorphic bound.
    Megamorphic,
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheState::Monomorphic => write!(f, "monomorphic"),
            CacheState::Polymorphic => write!(f, "polymorphic"),
            CacheState::Megamorphic => write!(f, "megamorphic"),
        }
    }
}

/// One stress invocation's outcome plus the cache state it was produced in.
#[derive(Debug, Clone, PartialEq)]
pub struct StressOutcome {
    /// Label of the shape fed to this invocation.
    pub shape_label: String,
    /// Cache state after this invocation.
    pub cache_state: CacheState,
    /// What the probe observably did.
    pub outcome: ExecutionOutcome,
}

/// Tracks distinct shape labels the way a bounded IC entry set would.
#[derive(Debug, Default)]
struct ShapeTracker {
    seen: ArrayVec<String, POLYMORPHIC_LIMIT>,
    overflowed: bool,
}

impl ShapeTracker {
    /// Records a shape label and reports the resulting cache state.
    fn observe(&mut self, label: &str) -> CacheState {
        let known = self.seen.iter().any(|s| s == label);
        if !self.overflowed && !known && self.seen.try_push(label.to_string()).is_err() {
            self.overflowed = true;
        }
        if self.overflowed {
            CacheState::Megamorphic
        } else if self.seen.len() <= 1 {
            CacheState::Monomorphic
        } else {
            CacheState::Polymorphic
        }
    }
}

/// Wraps the execution driver with a varying-shape input sequence.
#[derive(Debug, Default)]
pub struct StressDriver {
    driver: ExecutionDriver,
}

impl StressDriver {
    /// Creates a stress driver.
    pub fn new() -> Self {
        Self {
            driver: ExecutionDriver::new(),
        }
    }

    /// Invokes the probe once per shape, in sequence order.
    pub fn stress(&self, case: &StressCase) -> Vec<StressOutcome> {
        let mut tracker = ShapeTracker::default();
        case.shapes()
            .shapes()
            .iter()
            .map(|shape| {
                let cache_state = tracker.observe(&shape.label);
                let outcome = self.driver.run_shaped(case, &shape.input);
                StressOutcome {
                    shape_label: shape.label.clone(),
                    cache_state,
                    outcome,
                }
            })
            .collect()
    }
}

/// Checks that every outcome in a stress sequence is pairwise equivalent.
///
/// The first outcome is the reference; the diagnostic names the first
/// diverging shape and the cache state active when it was produced.
pub fn verify(outcomes: &[StressOutcome]) -> Comparison {
    let Some(first) = outcomes.first() else {
        return Comparison::pass();
    };
    for later in &outcomes[1..] {
        if !outcomes_equal(&first.outcome, &later.outcome) {
            return Comparison::fail(format!(
                "outcome changed at shape '{}' ({} cache): first {}, now {}",
                later.shape_label, later.cache_state, first.outcome, later.outcome
            ));
        }
    }
    Comparison::pass()
}
