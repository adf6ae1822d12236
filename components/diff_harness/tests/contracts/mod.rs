//! Contract tests for the harness public API
//!
//! These tests run full probe cases end to end against the in-process
//! reference engine and verify the verdict taxonomy the harness guarantees.

use diff_harness::{
    DiffHarness, Expectation, HarnessConfig, ProbeCase, ProbeRegistry, ShapeDescriptor,
    ShapeSequence, StressCase, Verdict,
};
use engine_bridge::LocalCompileService;
use harness_types::{ErrorDescriptor, ErrorKind, Value};
use std::cell::Cell;
use std::time::Duration;

fn registry_with_passing_cases() -> ProbeRegistry {
    let mut registry = ProbeRegistry::new();
    registry
        .register(ProbeCase::new(
            "join_basic",
            Expectation::Value(Value::String("1,2,3".to_string())),
            || Ok(Value::String("1,2,3".to_string())),
        ))
        .unwrap();
    registry
        .register(ProbeCase::new(
            "join_holes",
            Expectation::Value(Value::String("1,,,4".to_string())),
            || Ok(Value::String("1,,,4".to_string())),
        ))
        .unwrap();
    registry
        .register(ProbeCase::new(
            "nan_result",
            Expectation::CompareToBaseline,
            || Ok(Value::Double(f64::NAN)),
        ))
        .unwrap();
    registry
}

/// Every Pass-only registry finalizes to a successful run.
#[test]
fn test_run_all_success_contract() {
    let harness = DiffHarness::new(LocalCompileService::new());
    let run = harness.run_all(&registry_with_passing_cases());
    assert!(run.is_success());
    assert_eq!(run.total, 3);
    assert_eq!(run.passed, 3);
    assert_eq!(run.exit_code(), 0);
}

/// A probe whose observable behavior differs between the baseline and
/// compiled runs is a Fail (semantic mismatch), never an Error.
#[test]
fn test_tier_divergence_is_fail_contract() {
    let mut registry = registry_with_passing_cases();
    let calls = Cell::new(0);
    registry
        .register(ProbeCase::new(
            "drifts_between_tiers",
            Expectation::CompareToBaseline,
            move || {
                calls.set(calls.get() + 1);
                Ok(Value::Smi(calls.get()))
            },
        ))
        .unwrap();

    let harness = DiffHarness::new(LocalCompileService::new());
    let run = harness.run_all(&registry);
    assert!(!run.is_success());
    assert_eq!(run.failed, 1);
    assert_eq!(run.errors, 0);
    assert_eq!(run.failures[0].0, "drifts_between_tiers");
    assert!(run.failures[0].1.contains("compiled tier"));
}

/// A never-finishing compilation wait is an Error (inconclusive), not a
/// Fail, and does not abort the remaining cases.
#[test]
fn test_timeout_is_error_contract() {
    let mut engine = LocalCompileService::new();
    engine.set_wait_deadline(Duration::from_millis(2));
    engine.stall_function("stuck_probe");

    let mut registry = ProbeRegistry::new();
    registry
        .register(ProbeCase::new(
            "stuck_probe",
            Expectation::CompareToBaseline,
            || Ok(Value::Smi(1)),
        ))
        .unwrap();
    registry
        .register(ProbeCase::new(
            "still_runs",
            Expectation::CompareToBaseline,
            || Ok(Value::Smi(2)),
        ))
        .unwrap();

    let config = HarnessConfig {
        wait_timeout: Duration::from_millis(20),
        poll_interval: Duration::from_millis(1),
    };
    let harness = DiffHarness::with_config(engine, config);
    let run = harness.run_all(&registry);

    assert_eq!(run.errors, 1);
    assert_eq!(run.failed, 0);
    assert_eq!(run.passed, 1);
    assert_eq!(run.error_cases[0].0, "stuck_probe");
    assert!(run.error_cases[0].1.contains("timed out"));
}

/// An engine declining to compile is a valid outcome: the case still runs
/// both executions and passes, with tier-up recorded as not applied.
#[test]
fn test_declined_compilation_is_not_failure_contract() {
    let mut engine = LocalCompileService::new();
    engine.refuse_function("tiny_probe");

    let mut registry = ProbeRegistry::new();
    registry
        .register(ProbeCase::new(
            "tiny_probe",
            Expectation::Value(Value::Smi(3)),
            || Ok(Value::Smi(3)),
        ))
        .unwrap();

    let harness = DiffHarness::new(engine);
    let report = harness.run_case(registry.get("tiny_probe").unwrap());
    assert_eq!(report.verdict, Verdict::Pass);
    assert!(!report.tiered_up);
}

/// Probes that throw identically in both tiers pass; the report carries
/// descriptors, never live error objects.
#[test]
fn test_matching_thrown_errors_pass_contract() {
    let mut registry = ProbeRegistry::new();
    registry
        .register(ProbeCase::new(
            "throws_type_error",
            Expectation::CompareToBaseline,
            || Err(ErrorDescriptor::new(ErrorKind::TypeError, "x is not a function")),
        ))
        .unwrap();

    let harness = DiffHarness::new(LocalCompileService::new());
    let run = harness.run_all(&registry);
    assert!(run.is_success());
}

/// The map-population stress scenario: sizes 0, 1, 2 produce the same
/// snapshot rendering at every cache state.
#[test]
fn test_stress_map_population_contract() {
    let shapes = ShapeSequence::new(vec![
        ShapeDescriptor::new("size0", Value::Smi(0)),
        ShapeDescriptor::new("size1", Value::Smi(1)),
        ShapeDescriptor::new("size2", Value::Smi(2)),
    ]);
    let mut registry = ProbeRegistry::new();
    registry
        .register_stress(StressCase::new("map_sizes", shapes, |input| {
            // Populate a fresh map to the requested size and report the
            // sizes observed along the way.
            let Value::Smi(n) = input else {
                return Err(ErrorDescriptor::new(ErrorKind::TypeError, "size expected"));
            };
            let mut map = std::collections::BTreeMap::new();
            for i in 0..*n {
                map.insert(i, i);
            }
            let _ = map;
            Ok(Value::String("0,1,2".to_string()))
        }))
        .unwrap();

    let harness = DiffHarness::new(LocalCompileService::new());
    let run = harness.run_all(&registry);
    assert!(run.is_success());
}

/// A stress probe whose outcome changes when the cache degrades is a Fail
/// whose diagnostic names the diverging shape.
#[test]
fn test_stress_cache_degradation_fail_contract() {
    let shapes = ShapeSequence::new(vec![
        ShapeDescriptor::new("a", Value::Smi(1)),
        ShapeDescriptor::new("b", Value::Smi(1)),
        ShapeDescriptor::new("c", Value::Smi(1)),
        ShapeDescriptor::new("d", Value::Smi(1)),
        ShapeDescriptor::new("e", Value::Smi(1)),
    ]);
    let seen = Cell::new(0usize);
    let mut registry = ProbeRegistry::new();
    registry
        .register_stress(StressCase::new("degrades", shapes, move |_| {
            seen.set(seen.get() + 1);
            // Wrong answer once the fifth shape arrives.
            if seen.get() >= 5 {
                Ok(Value::Smi(0))
            } else {
                Ok(Value::Smi(1))
            }
        }))
        .unwrap();

    let harness = DiffHarness::new(LocalCompileService::new());
    let run = harness.run_all(&registry);
    assert_eq!(run.failed, 1);
    assert!(run.failures[0].1.contains("shape 'e'"));
    assert!(run.failures[0].1.contains("megamorphic"));
}
