//! Core value and outcome types for the differential tiering harness.
//!
//! This crate provides the foundational types shared by the harness and the
//! probe corpus: the opaque comparable value, thrown-error descriptors, and
//! the per-execution outcome record.
//!
//! # Overview
//!
//! - [`Value`] - Opaque comparable value produced by probe functions
//! - [`ErrorDescriptor`] - Captured thrown error (kind + message)
//! - [`ErrorKind`] - Types of JavaScript errors a probe can raise
//! - [`ExecutionOutcome`] - What one probe invocation observably did
//!
//! # Examples
//!
//! ```
//! use harness_types::{Value, ExecutionOutcome};
//!
//! let outcome = ExecutionOutcome::Return(Value::String("1,2,3".to_string()));
//! assert!(outcome.returned());
//!
//! // NaN compares equal to NaN under the harness equality rule.
//! assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod outcome;
mod value;

pub use error::{ErrorDescriptor, ErrorKind};
pub use outcome::ExecutionOutcome;
pub use value::Value;
