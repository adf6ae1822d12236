//! Engine capability boundary for tier-up compilation.
//!
//! The harness never links against a concrete engine. Everything it needs
//! from one is the two-operation [`CompileService`] trait: request an
//! asynchronous tier-up, and wait for outstanding compilation work to
//! finish. Any engine adapter that implements the trait can sit behind the
//! harness unchanged.
//!
//! [`LocalCompileService`] is the in-process reference engine used by the
//! CLI and the test suites: it compiles on a worker thread with configurable
//! delay, and can be told to refuse or stall specific functions to exercise
//! the harness's non-compilation and timeout paths.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod local;
mod service;

pub use local::LocalCompileService;
pub use service::{CompileRequest, CompileService};
