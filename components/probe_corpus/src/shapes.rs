//! Inline-cache stress sequences.
//!
//! Each sequence leads with a monomorphic prefix and introduces layout
//! changes later, so the probe's outcome is observed across the
//! monomorphic, polymorphic, and megamorphic cache states.

use crate::render;
use diff_harness::{ProbeRegistry, RegistryError, ShapeDescriptor, ShapeSequence, StressCase};
use harness_types::{ErrorDescriptor, ErrorKind, Value};
use std::collections::BTreeMap;

/// Key layouts for the map-population sequence: same population logic,
/// different key shapes per call.
fn map_population_shapes() -> ShapeSequence {
    ShapeSequence::new(vec![
        ShapeDescriptor::new(
            "string_keys",
            Value::List(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string()),
            ]),
        ),
        ShapeDescriptor::new(
            "int_keys",
            Value::List(vec![Value::Smi(10), Value::Smi(20)]),
        ),
        ShapeDescriptor::new(
            "mixed_keys",
            Value::List(vec![Value::String("a".to_string()), Value::Smi(20)]),
        ),
    ])
}

/// Layout permutations that all sum to the same total.
fn record_layout_shapes() -> ShapeSequence {
    ShapeSequence::new(vec![
        ShapeDescriptor::new(
            "xyz",
            Value::List(vec![Value::Smi(1), Value::Smi(2), Value::Smi(3)]),
        ),
        ShapeDescriptor::new(
            "zyx",
            Value::List(vec![Value::Smi(3), Value::Smi(2), Value::Smi(1)]),
        ),
        ShapeDescriptor::new(
            "yxz",
            Value::List(vec![Value::Smi(2), Value::Smi(1), Value::Smi(3)]),
        ),
    ])
}

/// Six string layouts that concatenate to the same text, enough to push a
/// call site past the polymorphic bound.
fn concat_shapes() -> ShapeSequence {
    let fragments: [&[&str]; 6] = [
        &["abc"],
        &["ab", "c"],
        &["a", "bc"],
        &["a", "b", "c"],
        &["", "abc"],
        &["ab", "", "c"],
    ];
    ShapeSequence::new(
        fragments
            .iter()
            .enumerate()
            .map(|(i, parts)| {
                ShapeDescriptor::new(
                    format!("layout{}", i),
                    Value::List(
                        parts
                            .iter()
                            .map(|p| Value::String((*p).to_string()))
                            .collect(),
                    ),
                )
            })
            .collect(),
    )
}

fn expect_list(input: &Value) -> Result<&[Value], ErrorDescriptor> {
    match input {
        Value::List(items) => Ok(items),
        other => Err(ErrorDescriptor::new(
            ErrorKind::TypeError,
            format!("expected a list input, got {}", other.type_of()),
        )),
    }
}

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register_stress(StressCase::new(
        "stress_map_population",
        map_population_shapes(),
        |input| {
            // Populate a fresh map through sizes 0, 1, 2 with whatever key
            // shape this call was given; the size trace must not depend on
            // the key layout.
            let keys = expect_list(input)?;
            let mut map = BTreeMap::new();
            let mut sizes = vec![Value::Smi(map.len() as i32)];
            for key in keys {
                map.insert(key.to_string(), Value::Boolean(true));
                sizes.push(Value::Smi(map.len() as i32));
            }
            Ok(Value::String(render::join(&sizes, ",")))
        },
    ))?;

    registry.register_stress(StressCase::new(
        "stress_record_field_sum",
        record_layout_shapes(),
        |input| {
            let fields = expect_list(input)?;
            let mut total = 0i32;
            for field in fields {
                match field {
                    Value::Smi(n) => total += n,
                    other => {
                        return Err(ErrorDescriptor::new(
                            ErrorKind::TypeError,
                            format!("expected a number field, got {}", other.type_of()),
                        ))
                    }
                }
            }
            Ok(Value::Smi(total))
        },
    ))?;

    registry.register_stress(StressCase::new(
        "stress_megamorphic_concat",
        concat_shapes(),
        |input| {
            let parts = expect_list(input)?;
            let mut text = String::new();
            for part in parts {
                text.push_str(&part.to_string());
            }
            Ok(Value::String(text))
        },
    ))?;

    Ok(())
}
