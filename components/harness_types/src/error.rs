//! Thrown-error descriptors.
//!
//! When a probe throws, the harness captures the error's kind and message
//! and drops the original error object. Comparing descriptors rather than
//! live objects keeps the two tiers' executions fully isolated.

use std::fmt;

/// The kind of JavaScript error a probe can raise.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Error in eval() function
    EvalError,
    /// Error in URI handling functions
    URIError,
    /// Internal engine error
    InternalError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::URIError => "URIError",
            ErrorKind::InternalError => "InternalError",
        };
        write!(f, "{}", name)
    }
}

/// A captured thrown error: kind plus message, nothing else.
///
/// Two descriptors are equal iff both fields are equal; this is the
/// thrown-path half of the harness equality rule.
///
/// # Examples
///
/// ```
/// use harness_types::{ErrorDescriptor, ErrorKind};
///
/// let err = ErrorDescriptor::new(ErrorKind::TypeError, "x is not a function");
/// assert_eq!(err.to_string(), "TypeError: x is not a function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl ErrorDescriptor {
    /// Creates a descriptor from a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
