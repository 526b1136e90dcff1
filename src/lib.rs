//! Tidy Report: static HTML reports from Playwright JSON test results
//!
//! This library flattens the hierarchical suite tree of a Playwright JSON
//! report into a flat record list plus an aggregate summary, and renders
//! the result into a self-contained HTML dashboard.

pub mod config;
pub mod normalizer;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// Outcome of a single test, derived from its first result attempt.
///
/// Runners report more statuses than the summary tallies; anything
/// unrecognized maps to `Unknown` rather than failing normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
    TimedOut,
    Interrupted,
    Unknown,
}

impl Status {
    /// Parse a runner-reported status string. Unrecognized values become
    /// `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "passed" => Status::Passed,
            "failed" => Status::Failed,
            "skipped" => Status::Skipped,
            "timedOut" => Status::TimedOut,
            "interrupted" => Status::Interrupted,
            _ => Status::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Passed => "passed",
            Status::Failed => "failed",
            Status::Skipped => "skipped",
            Status::TimedOut => "timedOut",
            Status::Interrupted => "interrupted",
            Status::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One flattened test outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRecord {
    /// Leaf test name
    pub title: String,
    /// Display key, `"<suite title> > <title>"`; not guaranteed unique
    pub full_title: String,
    /// Status of the first result attempt, or the `ok`-flag fallback
    pub status: Status,
    /// Milliseconds; 0 when the runner reported none
    pub duration: u64,
    /// Source location, falling back to the suite title, then "unknown"
    pub file: String,
    /// First result's error message, if any
    pub error: Option<String>,
}

/// Aggregate counts over a finished record list, recomputed fresh on
/// every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Sum of all record durations, milliseconds
    pub duration: u64,
    /// `round(passed / total * 100) + "%"`, or `"0%"` for an empty run
    pub pass_rate: String,
}

impl Summary {
    /// Single pass over the record list. Statuses outside the three
    /// tracked buckets (timedOut, interrupted, unknown) count toward
    /// `total` only, so `passed + failed + skipped <= total`.
    pub fn compute(tests: &[TestRecord]) -> Self {
        let total = tests.len();
        let passed = tests.iter().filter(|t| t.status == Status::Passed).count();
        let failed = tests.iter().filter(|t| t.status == Status::Failed).count();
        let skipped = tests.iter().filter(|t| t.status == Status::Skipped).count();
        let duration = tests.iter().map(|t| t.duration).sum();
        Summary {
            total,
            passed,
            failed,
            skipped,
            duration,
            pass_rate: pass_rate(passed, total),
        }
    }
}

/// Percentage of passed tests, rounded to the nearest whole percent.
/// An empty run reports "0%" rather than dividing by zero.
pub fn pass_rate(passed: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let pct = ((passed as f64 / total as f64) * 100.0).round() as u64;
    format!("{}%", pct)
}

/// The normalized report: the machine-readable contract embedded under
/// the `report-data` element of the generated page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub summary: Summary,
    pub tests: Vec<TestRecord>,
}
