//! The probe corpus: parameterized test data for the differential harness.
//!
//! Each module registers probe cases for one behavior area (arrays,
//! strings, numbers, BigInt, collections, thrown errors) plus the shape
//! sequences that drive inline-cache stress. Probes construct their working
//! state internally on every invocation, so baseline and compiled runs are
//! always fresh, isolated pairs.
//!
//! The snapshot renderers in [`render`] exist to express what the engine
//! under test is expected to produce; they are corpus data, not builtin
//! implementations.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod arrays;
mod bigint;
mod collections;
mod errors;
mod numbers;
mod render;
mod shapes;
mod strings;

use diff_harness::{ProbeRegistry, RegistryError};

/// Builds the full corpus registry: every probe case and stress case.
pub fn suite() -> Result<ProbeRegistry, RegistryError> {
    let mut registry = ProbeRegistry::new();
    arrays::register(&mut registry)?;
    strings::register(&mut registry)?;
    numbers::register(&mut registry)?;
    bigint::register(&mut registry)?;
    collections::register(&mut registry)?;
    errors::register(&mut registry)?;
    shapes::register(&mut registry)?;
    Ok(registry)
}
