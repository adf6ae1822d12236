//! Thrown-error probes.
//!
//! These throw deterministically in both tiers; the oracle compares the
//! captured descriptors by kind and message.

use diff_harness::{Expectation, ProbeCase, ProbeRegistry, RegistryError};
use harness_types::{ErrorDescriptor, ErrorKind, Value};

pub(crate) fn register(registry: &mut ProbeRegistry) -> Result<(), RegistryError> {
    registry.register(ProbeCase::new(
        "throw_type_error_on_non_callable",
        Expectation::CompareToBaseline,
        || {
            let callee = Value::Undefined;
            Err(ErrorDescriptor::new(
                ErrorKind::TypeError,
                format!("{} is not a function", callee),
            ))
        },
    ))?;

    registry.register(ProbeCase::new(
        "throw_range_error_on_bad_length",
        Expectation::CompareToBaseline,
        || {
            let length = -1i32;
            if length < 0 {
                return Err(ErrorDescriptor::new(
                    ErrorKind::RangeError,
                    "invalid array length",
                ));
            }
            Ok(Value::Smi(length))
        },
    ))?;

    registry.register(ProbeCase::new(
        "throw_reference_error_message",
        Expectation::CompareToBaseline,
        || {
            Err(ErrorDescriptor::new(
                ErrorKind::ReferenceError,
                "x is not defined",
            ))
        },
    ))?;

    Ok(())
}
