//! Error types for the CLI

use diff_harness::RegistryError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Corpus registration failed (duplicate probe id)
    #[error("corpus registration error: {0}")]
    Registry(#[from] RegistryError),

    /// Report serialization failed
    #[error("report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
