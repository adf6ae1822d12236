//! Map and Set behavior probes.
//!
//! Every probe builds its collection fresh inside the body, so repeat runs
//! never observe state mutated by an earlier tier.

use crate::render;
use diff_harness::{Expectation, ProbeCase, ProbeRegistry, RegistryError};
use harness_types::Value;
use std::collections::{BTreeMap, BTreeSet};

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register(ProbeCase::new(
        "map_population_sizes",
        Expectation::Value(Value::String("0,1,2".to_string())),
        || {
            let mut map = BTreeMap::new();
            let mut sizes = vec![Value::Smi(map.len() as i32)];
            map.insert("a", Value::Smi(1));
            sizes.push(Value::Smi(map.len() as i32));
            map.insert("b", Value::Smi(2));
            sizes.push(Value::Smi(map.len() as i32));
            Ok(Value::String(render::join(&sizes, ",")))
        },
    ))?;

    registry.register(ProbeCase::new(
        "map_delete_then_keys",
        Expectation::Value(Value::List(vec![Value::String("b".to_string())])),
        || {
            let mut map = BTreeMap::new();
            map.insert("a", Value::Smi(1));
            map.insert("b", Value::Smi(2));
            map.remove("a");
            Ok(Value::List(
                map.keys().map(|k| Value::String((*k).to_string())).collect(),
            ))
        },
    ))?;

    registry.register(ProbeCase::new(
        "map_overwrite_keeps_size",
        Expectation::Value(Value::Smi(1)),
        || {
            let mut map = BTreeMap::new();
            map.insert("k", Value::Smi(1));
            map.insert("k", Value::Smi(2));
            Ok(Value::Smi(map.len() as i32))
        },
    ))?;

    registry.register(ProbeCase::new(
        "set_dedupes_inserts",
        Expectation::Value(Value::Smi(3)),
        || {
            let mut set = BTreeSet::new();
            for n in [1, 2, 2, 3, 3, 3] {
                set.insert(n);
            }
            Ok(Value::Smi(set.len() as i32))
        },
    ))?;

    registry.register(ProbeCase::new(
        "set_membership_after_remove",
        Expectation::Value(Value::Boolean(false)),
        || {
            let mut set = BTreeSet::new();
            set.insert(7);
            set.remove(&7);
            Ok(Value::Boolean(set.contains(&7)))
        },
    ))?;

    Ok(())
}
