//! BigInt behavior probes.

use diff_harness::{Expectation, ProbeCase, ProbeRegistry, RegistryError};
use harness_types::Value;
use num_bigint::BigInt;

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register(ProbeCase::new(
        "bigint_factorial_20",
        Expectation::Value(Value::BigInt(BigInt::from(2_432_902_008_176_640_000u64))),
        || {
            let mut acc = BigInt::from(1u32);
            for i in 2..=20u32 {
                acc *= i;
            }
            Ok(Value::BigInt(acc))
        },
    ))?;

    registry.register(ProbeCase::new(
        "bigint_pow_2_100",
        Expectation::Value(Value::BigInt(BigInt::from(2u32).pow(100))),
        || {
            // Repeated doubling; a different path than the declared pow.
            let mut acc = BigInt::from(1u32);
            for _ in 0..100 {
                acc *= 2;
            }
            Ok(Value::BigInt(acc))
        },
    ))?;

    registry.register(ProbeCase::new(
        "bigint_typeof",
        Expectation::Value(Value::String("bigint".to_string())),
        || Ok(Value::String(Value::BigInt(BigInt::from(1)).type_of().to_string())),
    ))?;

    registry.register(ProbeCase::new(
        "bigint_not_equal_to_smi",
        Expectation::Value(Value::Boolean(false)),
        || Ok(Value::Boolean(Value::BigInt(BigInt::from(1)) == Value::Smi(1))),
    ))?;

    Ok(())
}
