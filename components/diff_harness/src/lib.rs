//! Differential JIT-correctness verification harness.
//!
//! Asserts that a probe function behaves identically whether it runs in the
//! baseline interpreted tier or after asynchronous tier-up compilation, and
//! that inline-cache state transitions never change observable semantics.
//!
//! Per probe case the harness runs baseline first, requests tier-up through
//! the engine's [`CompileService`](engine_bridge::CompileService), waits
//! cooperatively for completion, runs the compiled tier, and hands both
//! outcomes to the equivalence oracle. Cache stress cases drive one probe
//! across a sequence of input shapes instead of a single call.
//!
//! # Example
//!
//! ```
//! use diff_harness::{DiffHarness, Expectation, ProbeCase, ProbeRegistry};
//! use engine_bridge::LocalCompileService;
//! use harness_types::Value;
//!
//! let mut registry = ProbeRegistry::new();
//! registry
//!     .register(ProbeCase::new(
//!         "join_basic",
//!         Expectation::Value(Value::String("1,2,3".to_string())),
//!         || Ok(Value::String("1,2,3".to_string())),
//!     ))
//!     .unwrap();
//!
//! let harness = DiffHarness::new(LocalCompileService::new());
//! let report = harness.run_all(&registry);
//! assert!(report.is_success());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod controller;
pub mod driver;
pub mod harness;
pub mod oracle;
pub mod registry;
pub mod report;
pub mod stress;

pub use controller::{CompilationController, CompilationHandle, CompileState};
pub use driver::ExecutionDriver;
pub use harness::{DiffHarness, HarnessConfig, HarnessError};
pub use oracle::{compare, outcomes_equal, Comparison, Verdict};
pub use registry::{Expectation, ProbeCase, ProbeRegistry, RegistryError, StressCase};
pub use report::{CaseReport, ReportSink, RunReport};
pub use stress::{CacheState, ShapeDescriptor, ShapeSequence, StressDriver, StressOutcome};
