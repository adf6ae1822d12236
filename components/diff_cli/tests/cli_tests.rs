//! CLI integration tests

use clap::Parser;
use diff_cli::{run, Cli};

#[test]
fn test_parsed_args_drive_a_passing_run() {
    let cli = Cli::parse_from([
        "tierdiff",
        "--timeout-ms",
        "5000",
        "--filter",
        "stress",
        "--detailed",
    ]);
    assert_eq!(cli.timeout_ms, 5000);
    assert_eq!(run(&cli).unwrap(), 0);
}

#[test]
fn test_json_report_run() {
    let cli = Cli::parse_from(["tierdiff", "--json", "--filter", "array_join"]);
    assert_eq!(run(&cli).unwrap(), 0);
}

#[test]
fn test_filter_matching_nothing_is_vacuously_successful() {
    let cli = Cli::parse_from(["tierdiff", "--filter", "no_such_case"]);
    assert_eq!(run(&cli).unwrap(), 0);
}
