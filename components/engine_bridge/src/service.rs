//! The compile service interface.

use std::fmt;

/// A tier-up compilation request for a named function.
///
/// The name is the only routing key the interface guarantees; engines are
/// free to ignore everything else about the function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompileRequest {
    /// Engine-visible name of the function to tier up.
    pub function_name: String,
}

impl CompileRequest {
    /// Creates a request for the named function.
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
        }
    }
}

impl fmt::Display for CompileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "compile({})", self.function_name)
    }
}

/// Asynchronous compilation service exposed by the host engine.
///
/// Exactly two operations; nothing about the engine's calling convention,
/// thread pool, or tiering policy leaks through this seam.
pub trait CompileService {
    /// Requests tier-up compilation for the named function.
    ///
    /// Returns whether the request was accepted, not whether compilation
    /// will occur. Engines may decline small or sufficiently simple
    /// functions; a `false` here is a valid, non-failing answer.
    fn jit_compile_async(&self, request: &CompileRequest) -> bool;

    /// Blocks until the engine finishes any outstanding compilation work
    /// matching the request.
    ///
    /// Returns whether completion was observed before an engine-internal
    /// deadline. With no outstanding work for the request, returns true
    /// immediately.
    fn wait_jit_compile_finish(&self, request: &CompileRequest) -> bool;
}
