//! Unit tests for harness components

use diff_harness::{
    compare, outcomes_equal, CacheState, CompilationController, CompileState, Expectation,
    ProbeCase, ProbeRegistry, ShapeDescriptor, ShapeSequence, StressCase, StressDriver, Verdict,
};
use engine_bridge::LocalCompileService;
use harness_types::{ErrorDescriptor, ErrorKind, ExecutionOutcome, Value};
use std::time::Duration;

// ============================================================================
// Oracle Tests
// ============================================================================

#[test]
fn test_outcomes_equal_is_nan_tolerant() {
    let a = ExecutionOutcome::Return(Value::Double(f64::NAN));
    let b = ExecutionOutcome::Return(Value::Double(f64::NAN));
    assert!(outcomes_equal(&a, &b));
}

#[test]
fn test_outcomes_equal_rejects_kind_mismatch() {
    let a = ExecutionOutcome::Threw(ErrorDescriptor::new(ErrorKind::TypeError, "m"));
    let b = ExecutionOutcome::Threw(ErrorDescriptor::new(ErrorKind::RangeError, "m"));
    assert!(!outcomes_equal(&a, &b));
}

#[test]
fn test_compare_without_expected_is_tier_invariance_only() {
    let a = ExecutionOutcome::Return(Value::Smi(5));
    let b = ExecutionOutcome::Return(Value::Smi(5));
    assert!(compare(&a, &b, &Expectation::CompareToBaseline).is_pass());
}

#[test]
fn test_compare_expected_checks_baseline_first() {
    // Both tiers agree with each other but not with the declared value:
    // the diagnostic must blame the baseline tier.
    let a = ExecutionOutcome::Return(Value::String("1,2".to_string()));
    let b = ExecutionOutcome::Return(Value::String("1,2".to_string()));
    let expected = Expectation::Value(Value::String("1,2,3".to_string()));
    let cmp = compare(&a, &b, &expected);
    assert_eq!(cmp.verdict, Verdict::Fail);
    assert!(cmp.diagnostic.unwrap().starts_with("baseline tier"));
}

// ============================================================================
// Controller Tests
// ============================================================================

#[test]
fn test_elapsed_deadline_never_reaches_compiled() {
    let engine = LocalCompileService::new();
    let controller = CompilationController::new(&engine);
    for _ in 0..10 {
        let handle = controller.request_compile("f");
        let handle = controller.await_completion(handle, Duration::ZERO);
        assert_eq!(handle.state(), CompileState::TimedOut);
    }
}

#[test]
fn test_handle_owns_probe_id_and_acceptance() {
    let mut engine = LocalCompileService::new();
    engine.refuse_function("declined");
    let controller = CompilationController::new(&engine);

    let handle = controller.request_compile("declined");
    assert_eq!(handle.probe_id(), "declined");
    assert!(!handle.accepted());
    assert!(!handle.is_terminal());
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_stress_case_lookup() {
    let mut registry = ProbeRegistry::new();
    let shapes = ShapeSequence::new(vec![ShapeDescriptor::new("s0", Value::Smi(0))]);
    registry
        .register_stress(StressCase::new("stress", shapes, |_| Ok(Value::Smi(0))))
        .unwrap();
    assert!(registry.get_stress("stress").is_some());
    assert!(registry.get("stress").is_none());
}

#[test]
fn test_probe_case_is_immutable_once_registered() {
    let mut registry = ProbeRegistry::new();
    registry
        .register(ProbeCase::new(
            "fixed",
            Expectation::Value(Value::Smi(9)),
            || Ok(Value::Smi(9)),
        ))
        .unwrap();
    let case = registry.get("fixed").unwrap();
    assert_eq!(case.expected(), &Expectation::Value(Value::Smi(9)));
    assert_eq!(case.invoke(), Ok(Value::Smi(9)));
}

// ============================================================================
// Stress Driver Tests
// ============================================================================

#[test]
fn test_stress_outcomes_are_in_sequence_order() {
    let shapes = ShapeSequence::new(vec![
        ShapeDescriptor::new("s0", Value::Smi(0)),
        ShapeDescriptor::new("s1", Value::Smi(1)),
        ShapeDescriptor::new("s2", Value::Smi(2)),
    ]);
    let case = StressCase::new("ordered", shapes, |_| Ok(Value::Boolean(true)));
    let outcomes = StressDriver::new().stress(&case);
    let labels: Vec<&str> = outcomes.iter().map(|o| o.shape_label.as_str()).collect();
    assert_eq!(labels, vec!["s0", "s1", "s2"]);
}

#[test]
fn test_single_shape_stays_monomorphic() {
    let shapes = ShapeSequence::new(vec![
        ShapeDescriptor::new("only", Value::Smi(0)),
        ShapeDescriptor::new("only", Value::Smi(0)),
        ShapeDescriptor::new("only", Value::Smi(0)),
    ]);
    let case = StressCase::new("mono", shapes, |_| Ok(Value::Smi(0)));
    let outcomes = StressDriver::new().stress(&case);
    assert!(outcomes
        .iter()
        .all(|o| o.cache_state == CacheState::Monomorphic));
}
