//! Normalization: hierarchical suite tree to flat records plus summary
//!
//! No I/O and no failure paths: every absent field has a documented
//! fallback, so a sparse or malformed tree degrades to fewer records,
//! never an error. All fatal conditions live elsewhere.

mod schema;

pub use schema::{ErrorNode, RawReport, ResultNode, SpecNode, SuiteNode};

use crate::{Report, Status, Summary, TestRecord};

/// Flatten a parsed report into records plus a freshly computed summary.
///
/// Traversal is a depth-first pre-order walk over the suite forest: a
/// suite's own specs are emitted before any of its children's, children
/// in list order. Null suite entries are skipped.
pub fn normalize(report: &RawReport) -> Report {
    let mut tests = Vec::new();
    if let Some(suites) = &report.suites {
        for suite in suites.iter().flatten() {
            collect(suite, &mut tests);
        }
    }
    let summary = Summary::compute(&tests);
    Report { summary, tests }
}

fn collect(suite: &SuiteNode, out: &mut Vec<TestRecord>) {
    for spec in &suite.specs {
        out.push(record_for(suite, spec));
    }
    for child in suite.suites.iter().flatten() {
        collect(child, out);
    }
}

/// Derive one record from a spec. Field fallbacks:
/// status `results[0].status`, else `ok` flag; duration `results[0]`
/// rounded to whole non-negative ms, else 0; file `suite.file`, else
/// `suite.title`, else "unknown". Empty strings count as absent.
fn record_for(suite: &SuiteNode, spec: &SpecNode) -> TestRecord {
    let first = spec.results.first();

    let status = match first
        .and_then(|r| r.status.as_deref())
        .filter(|s| !s.is_empty())
    {
        Some(s) => Status::parse(s),
        None if spec.ok == Some(true) => Status::Passed,
        None => Status::Failed,
    };

    let duration = first
        .and_then(|r| r.duration)
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| d.round() as u64)
        .unwrap_or(0);

    let error = first
        .and_then(|r| r.error.as_ref())
        .and_then(|e| e.message.clone());

    let suite_title = suite.title.as_deref().unwrap_or("");
    let file = suite
        .file
        .clone()
        .filter(|f| !f.is_empty())
        .or_else(|| suite.title.clone().filter(|t| !t.is_empty()))
        .unwrap_or_else(|| "unknown".to_string());

    TestRecord {
        title: spec.title.clone(),
        full_title: format!("{} > {}", suite_title, spec.title),
        status,
        duration,
        file,
        error,
    }
}
