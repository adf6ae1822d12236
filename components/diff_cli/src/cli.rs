//! CLI argument definitions.

use clap::Parser;

/// Differential JIT-correctness harness for a tiered JavaScript engine.
///
/// Runs the built-in probe corpus in the baseline tier and again after
/// asynchronous tier-up compilation, and verifies that observable behavior
/// never changes across tiers or inline-cache states.
#[derive(Debug, Parser)]
#[command(name = "tierdiff", version, about)]
pub struct Cli {
    /// Upper bound in milliseconds on one case's compilation wait
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Sleep slice in milliseconds between compilation completion polls
    #[arg(long, default_value_t = 1)]
    pub poll_interval_ms: u64,

    /// Simulated per-function compile time of the reference engine, in
    /// milliseconds
    #[arg(long, default_value_t = 1)]
    pub compile_delay_ms: u64,

    /// Only run cases whose id contains this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// List registered case ids without running anything
    #[arg(long)]
    pub list: bool,

    /// Emit the run report as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Include per-case diagnostics in the text summary
    #[arg(long)]
    pub detailed: bool,
}

impl Cli {
    /// Builds an argument set with every flag at its clap-declared
    /// default. Defaults live only in the `#[arg]` attributes.
    pub fn with_defaults() -> Self {
        Self::parse_from(["tierdiff"])
    }
}
