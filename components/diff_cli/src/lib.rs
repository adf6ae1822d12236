//! Differential Tiering Harness CLI Library
//!
//! Provides the argument surface and runner for the `tierdiff` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runner::run;
