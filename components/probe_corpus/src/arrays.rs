//! Array behavior probes.

use crate::render;
use diff_harness::{Expectation, ProbeCase, ProbeRegistry, RegistryError};
use harness_types::Value;

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register(ProbeCase::new(
        "array_join_default",
        Expectation::Value(Value::String("1,2,3".to_string())),
        || {
            let items = vec![Value::Smi(1), Value::Smi(2), Value::Smi(3)];
            Ok(Value::String(render::join(&items, ",")))
        },
    ))?;

    registry.register(ProbeCase::new(
        "array_join_nullish_holes",
        Expectation::Value(Value::String("1,,,4".to_string())),
        || {
            let items = vec![Value::Smi(1), Value::Null, Value::Undefined, Value::Smi(4)];
            Ok(Value::String(render::join(&items, ",")))
        },
    ))?;

    registry.register(ProbeCase::new(
        "array_concat_spread",
        Expectation::Value(Value::List(vec![
            Value::Smi(1),
            Value::Smi(2),
            Value::Smi(3),
        ])),
        || {
            let mut merged = vec![Value::Smi(1), Value::Smi(2)];
            merged.extend(vec![Value::Smi(3)]);
            Ok(Value::List(merged))
        },
    ))?;

    registry.register(ProbeCase::new(
        "array_reverse_copy",
        Expectation::Value(Value::List(vec![
            Value::Smi(1),
            Value::Smi(2),
            Value::Smi(3),
        ])),
        || {
            let mut items = vec![Value::Smi(3), Value::Smi(2), Value::Smi(1)];
            items.reverse();
            Ok(Value::List(items))
        },
    ))?;

    registry.register(ProbeCase::new(
        "array_flatten_one_level",
        Expectation::Value(Value::List(vec![
            Value::Smi(1),
            Value::Smi(2),
            Value::Smi(3),
        ])),
        || {
            let nested = vec![
                Value::List(vec![Value::Smi(1), Value::Smi(2)]),
                Value::Smi(3),
            ];
            let mut flat = Vec::new();
            for item in nested {
                match item {
                    Value::List(inner) => flat.extend(inner),
                    other => flat.push(other),
                }
            }
            Ok(Value::List(flat))
        },
    ))?;

    registry.register(ProbeCase::new(
        "array_destructure_swap",
        Expectation::Value(Value::List(vec![Value::Smi(2), Value::Smi(1)])),
        || {
            let (a, b) = (Value::Smi(1), Value::Smi(2));
            let (a, b) = (b, a);
            Ok(Value::List(vec![a, b]))
        },
    ))?;

    Ok(())
}
