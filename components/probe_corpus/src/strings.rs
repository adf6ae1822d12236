//! String behavior probes.

use crate::render;
use diff_harness::{Expectation, ProbeCase, ProbeRegistry, RegistryError};
use harness_types::Value;

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register(ProbeCase::new(
        "string_repeat",
        Expectation::Value(Value::String("ababab".to_string())),
        || Ok(Value::String("ab".repeat(3))),
    ))?;

    registry.register(ProbeCase::new(
        "string_template_concat",
        Expectation::Value(Value::String("a1b".to_string())),
        || {
            let n = Value::Smi(1);
            Ok(Value::String(format!("a{}b", n)))
        },
    ))?;

    registry.register(ProbeCase::new(
        "string_split_rejoin",
        Expectation::Value(Value::String("1,2,3".to_string())),
        || {
            let parts: Vec<Value> = "1,2,3"
                .split(',')
                .map(|s| Value::String(s.to_string()))
                .collect();
            Ok(Value::String(render::join(&parts, ",")))
        },
    ))?;

    registry.register(ProbeCase::new(
        "string_slice_middle",
        Expectation::Value(Value::String("ell".to_string())),
        || Ok(Value::String("hello"[1..4].to_string())),
    ))?;

    registry.register(ProbeCase::new(
        "string_empty_is_falsy",
        Expectation::Value(Value::Boolean(false)),
        || Ok(Value::Boolean(Value::String(String::new()).is_truthy())),
    ))?;

    Ok(())
}
