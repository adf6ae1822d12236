//! Probe case registration.
//!
//! The registry is explicit and constructed: cases are registered in code
//! and run in registration order, so there is no process-wide registration
//! order to depend on. A case is immutable once registered.

use crate::stress::ShapeSequence;
use harness_types::{ErrorDescriptor, Value};
use std::collections::HashSet;
use std::fmt;

/// A probe body: no required arguments, returns a value or throws.
///
/// Each invocation must construct its working state internally so that
/// baseline and compiled runs are fresh, isolated pairs.
pub type ProbeBody = Box<dyn Fn() -> Result<Value, ErrorDescriptor>>;

/// A shaped probe body: takes one input shape per invocation.
pub type ShapedProbeBody = Box<dyn Fn(&Value) -> Result<Value, ErrorDescriptor>>;

/// What a probe case is checked against.
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// No declared result; the compiled outcome is checked against the
    /// baseline outcome only (tier-invariance).
    CompareToBaseline,
    /// A statically known canonical result the baseline must produce,
    /// independent of tier.
    Value(Value),
}

/// A single registered probe case.
pub struct ProbeCase {
    id: String,
    body: ProbeBody,
    expected: Expectation,
}

impl ProbeCase {
    /// Creates a probe case from an id, expectation, and body.
    pub fn new<F>(id: impl Into<String>, expected: Expectation, body: F) -> Self
    where
        F: Fn() -> Result<Value, ErrorDescriptor> + 'static,
    {
        Self {
            id: id.into(),
            body: Box::new(body),
            expected,
        }
    }

    /// The unique case identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared expectation.
    pub fn expected(&self) -> &Expectation {
        &self.expected
    }

    /// Invokes the probe body once.
    pub fn invoke(&self) -> Result<Value, ErrorDescriptor> {
        (self.body)()
    }
}

impl fmt::Debug for ProbeCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeCase")
            .field("id", &self.id)
            .field("expected", &self.expected)
            .finish()
    }
}

/// A registered inline-cache stress case: one shaped probe plus the ordered
/// shape sequence that drives it.
pub struct StressCase {
    id: String,
    body: ShapedProbeBody,
    shapes: ShapeSequence,
}

impl StressCase {
    /// Creates a stress case from an id, shape sequence, and shaped body.
    pub fn new<F>(id: impl Into<String>, shapes: ShapeSequence, body: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ErrorDescriptor> + 'static,
    {
        Self {
            id: id.into(),
            body: Box::new(body),
            shapes,
        }
    }

    /// The unique case identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ordered shape sequence.
    pub fn shapes(&self) -> &ShapeSequence {
        &self.shapes
    }

    /// Invokes the probe body once with the given input.
    pub fn invoke(&self, input: &Value) -> Result<Value, ErrorDescriptor> {
        (self.body)(input)
    }
}

impl fmt::Debug for StressCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StressCase")
            .field("id", &self.id)
            .field("shapes", &self.shapes)
            .finish()
    }
}

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A case with this id is already registered.
    DuplicateId(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId(id) => {
                write!(f, "probe id already registered: {}", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// An ordered collection of probe and stress cases.
///
/// Ids are unique across both kinds of case, so a report line always names
/// exactly one registration.
#[derive(Debug, Default)]
pub struct ProbeRegistry {
    cases: Vec<ProbeCase>,
    stress_cases: Vec<StressCase>,
    ids: HashSet<String>,
}

impl ProbeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a probe case, rejecting duplicate ids.
    pub fn register(&mut self, case: ProbeCase) -> Result<(), RegistryError> {
        if !self.ids.insert(case.id().to_string()) {
            return Err(RegistryError::DuplicateId(case.id().to_string()));
        }
        self.cases.push(case);
        Ok(())
    }

    /// Registers a stress case, rejecting duplicate ids.
    pub fn register_stress(&mut self, case: StressCase) -> Result<(), RegistryError> {
        if !self.ids.insert(case.id().to_string()) {
            return Err(RegistryError::DuplicateId(case.id().to_string()));
        }
        self.stress_cases.push(case);
        Ok(())
    }

    /// Looks up a probe case by id.
    pub fn get(&self, id: &str) -> Option<&ProbeCase> {
        self.cases.iter().find(|c| c.id() == id)
    }

    /// Looks up a stress case by id.
    pub fn get_stress(&self, id: &str) -> Option<&StressCase> {
        self.stress_cases.iter().find(|c| c.id() == id)
    }

    /// Probe cases in registration order.
    pub fn cases(&self) -> &[ProbeCase] {
        &self.cases
    }

    /// Stress cases in registration order.
    pub fn stress_cases(&self) -> &[StressCase] {
        &self.stress_cases
    }

    /// Total number of registered cases of both kinds.
    pub fn len(&self) -> usize {
        self.cases.len() + self.stress_cases.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty() && self.stress_cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = ProbeRegistry::new();
        registry
            .register(ProbeCase::new("a", Expectation::CompareToBaseline, || {
                Ok(Value::Smi(1))
            }))
            .unwrap();
        assert!(registry.get("a").is_some());
        assert!(registry.get("b").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = ProbeRegistry::new();
        registry
            .register(ProbeCase::new("a", Expectation::CompareToBaseline, || {
                Ok(Value::Smi(1))
            }))
            .unwrap();
        let err = registry
            .register(ProbeCase::new("a", Expectation::CompareToBaseline, || {
                Ok(Value::Smi(2))
            }))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_duplicate_id_across_kinds_rejected() {
        let mut registry = ProbeRegistry::new();
        registry
            .register(ProbeCase::new("a", Expectation::CompareToBaseline, || {
                Ok(Value::Smi(1))
            }))
            .unwrap();
        let err = registry
            .register_stress(StressCase::new("a", ShapeSequence::new(vec![]), |_| {
                Ok(Value::Smi(1))
            }))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = ProbeRegistry::new();
        for id in ["one", "two", "three"] {
            registry
                .register(ProbeCase::new(id, Expectation::CompareToBaseline, || {
                    Ok(Value::Undefined)
                }))
                .unwrap();
        }
        let ids: Vec<&str> = registry.cases().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["one", "two", "three"]);
    }
}
