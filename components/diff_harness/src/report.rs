//! Case reports and the append-only report sink.

use crate::oracle::Verdict;
use harness_types::ExecutionOutcome;
use serde::{Deserialize, Serialize};

/// Everything recorded about one finished case.
///
/// Emitted only after both outcomes are available or the compilation
/// controller reached a terminal failure/timeout state; never mutated
/// afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// The case identifier.
    pub probe_id: String,
    /// Baseline-tier outcome.
    pub baseline: ExecutionOutcome,
    /// Compiled-tier outcome; absent when the controller never reached
    /// Compiled.
    pub compiled: Option<ExecutionOutcome>,
    /// Whether the function was actually promoted to the compiled tier.
    pub tiered_up: bool,
    /// The verdict.
    pub verdict: Verdict,
    /// Diff or fault context for non-Pass verdicts.
    pub diagnostic: Option<String>,
}

/// Append-only aggregation of case reports.
#[derive(Debug, Default)]
pub struct ReportSink {
    reports: Vec<CaseReport>,
}

impl ReportSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a case report. No report is ever dropped or rewritten.
    pub fn record(&mut self, report: CaseReport) {
        self.reports.push(report);
    }

    /// The recorded reports, in recording order.
    pub fn reports(&self) -> &[CaseReport] {
        &self.reports
    }

    /// Number of recorded reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Computes the aggregate run report.
    pub fn finalize(&self) -> RunReport {
        let mut run = RunReport::new();
        for report in &self.reports {
            run.total += 1;
            match report.verdict {
                Verdict::Pass => run.passed += 1,
                Verdict::Fail => {
                    run.failed += 1;
                    run.failures.push((
                        report.probe_id.clone(),
                        report.diagnostic.clone().unwrap_or_default(),
                    ));
                }
                Verdict::Error => {
                    run.errors += 1;
                    run.error_cases.push((
                        report.probe_id.clone(),
                        report.diagnostic.clone().unwrap_or_default(),
                    ));
                }
            }
        }
        run
    }
}

/// Aggregate statistics and failure details for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Total number of cases run.
    pub total: usize,
    /// Cases with verdict Pass.
    pub passed: usize,
    /// Cases with verdict Fail (semantic mismatch).
    pub failed: usize,
    /// Cases with verdict Error (timeout or harness fault).
    pub errors: usize,
    /// Fail details as (probe id, diagnostic).
    pub failures: Vec<(String, String)>,
    /// Error details as (probe id, diagnostic).
    pub error_cases: Vec<(String, String)>,
}

impl RunReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass iff every recorded case has verdict Pass.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Process exit code: non-zero iff any Fail or Error exists.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Pass rate as a percentage of all cases.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Generates a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Differential Tiering Results:\n\
             Total:  {}\n\
             Passed: {} ({:.1}%)\n\
             Failed: {}\n\
             Errors: {}",
            self.total,
            self.passed,
            self.pass_rate(),
            self.failed,
            self.errors
        )
    }

    /// Generates a detailed report including per-case diagnostics.
    ///
    /// Fail and Error cases are listed under separate headings: a semantic
    /// mismatch and an inconclusive case must never read the same.
    pub fn detailed_summary(&self) -> String {
        let mut output = self.summary();

        if !self.failures.is_empty() {
            output.push_str("\n\nFailures (semantic mismatch):\n");
            for (id, diagnostic) in &self.failures {
                output.push_str(&format!("  - {}\n    {}\n", id, diagnostic));
            }
        }
        if !self.error_cases.is_empty() {
            output.push_str("\n\nErrors (inconclusive):\n");
            for (id, diagnostic) in &self.error_cases {
                output.push_str(&format!("  - {}\n    {}\n", id, diagnostic));
            }
        }

        output
    }

    /// Export report as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
