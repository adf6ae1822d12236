//! Corpus runner backing the `tierdiff` binary.

use crate::cli::Cli;
use crate::error::CliResult;
use diff_harness::{DiffHarness, HarnessConfig, ReportSink};
use engine_bridge::LocalCompileService;
use std::time::Duration;

fn selected(filter: Option<&str>, id: &str) -> bool {
    filter.map(|f| id.contains(f)).unwrap_or(true)
}

/// Runs the built-in corpus per the CLI arguments and returns the process
/// exit code.
pub fn run(cli: &Cli) -> CliResult<i32> {
    let registry = probe_corpus::suite()?;

    if cli.list {
        for case in registry.cases() {
            println!("{}", case.id());
        }
        for case in registry.stress_cases() {
            println!("{} (stress)", case.id());
        }
        return Ok(0);
    }

    let engine = LocalCompileService::with_compile_delay(Duration::from_millis(
        cli.compile_delay_ms,
    ));
    let config = HarnessConfig {
        wait_timeout: Duration::from_millis(cli.timeout_ms),
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
    };
    let harness = DiffHarness::with_config(engine, config);

    let filter = cli.filter.as_deref();
    let mut sink = ReportSink::new();
    for case in registry.cases() {
        if selected(filter, case.id()) {
            sink.record(harness.run_case(case));
        }
    }
    for case in registry.stress_cases() {
        if selected(filter, case.id()) {
            sink.record(harness.run_stress_case(case));
        }
    }

    let report = sink.finalize();
    if cli.json {
        println!("{}", report.to_json()?);
    } else if cli.detailed {
        println!("{}", report.detailed_summary());
    } else {
        println!("{}", report.summary());
    }

    Ok(report.exit_code())
}
