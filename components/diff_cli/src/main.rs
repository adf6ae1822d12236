//! Differential Tiering Harness CLI
//!
//! Entry point for the `tierdiff` binary. Parses CLI arguments and
//! delegates to the runner; the exit code is a deterministic function of
//! the aggregate report (non-zero iff any Fail or Error verdict exists).

use clap::Parser;
use diff_cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
