//! Number behavior probes, including the NaN and Smi/Double seams.

use diff_harness::{Expectation, ProbeCase, ProbeRegistry, RegistryError};
use harness_types::Value;

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register(ProbeCase::new(
        "number_nan_propagation",
        // NaN has no literal canonical form worth declaring; the tiers
        // only need to agree with each other.
        Expectation::CompareToBaseline,
        || {
            let zero = 0.0f64;
            Ok(Value::Double(zero / zero))
        },
    ))?;

    registry.register(ProbeCase::new(
        "number_nan_is_falsy",
        Expectation::Value(Value::Boolean(false)),
        || Ok(Value::Boolean(Value::Double(f64::NAN).is_truthy())),
    ))?;

    registry.register(ProbeCase::new(
        "number_smi_overflow_to_double",
        Expectation::Value(Value::Double(2_147_483_648.0)),
        || {
            let max = i32::MAX as f64;
            Ok(Value::Double(max + 1.0))
        },
    ))?;

    registry.register(ProbeCase::new(
        "number_double_rounding",
        Expectation::Value(Value::Double(0.1 + 0.2)),
        || {
            let tenth = 0.1f64;
            let fifth = 0.2f64;
            Ok(Value::Double(tenth + fifth))
        },
    ))?;

    registry.register(ProbeCase::new(
        "number_typeof",
        Expectation::Value(Value::String("number".to_string())),
        || Ok(Value::String(Value::Double(3.5).type_of().to_string())),
    ))?;

    Ok(())
}
