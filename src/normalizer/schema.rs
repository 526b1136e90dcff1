//! Input-side schema for Playwright JSON reports
//!
//! Every field is defaulted: normalization is best effort and must survive
//! arbitrarily sparse trees without erroring.

use serde::Deserialize;

/// Top-level document shape. A report without a `suites` key is a valid,
/// if unusual, empty run; the distinction between "absent" and "empty"
/// is kept so the CLI can warn about the former.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReport {
    #[serde(default)]
    pub suites: Option<Vec<Option<SuiteNode>>>,
}

/// A named grouping of tests; may nest further suites to arbitrary depth.
///
/// `suites` entries are nullable because malformed trees occur in the
/// wild; null entries are skipped during traversal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuiteNode {
    pub title: Option<String>,
    pub file: Option<String>,
    pub specs: Vec<SpecNode>,
    pub suites: Vec<Option<SuiteNode>>,
}

/// One test case definition; `results` holds execution attempts in order
/// (retries append, the first attempt decides the record).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpecNode {
    pub title: String,
    /// Fallback pass/fail signal used when `results` is empty
    pub ok: Option<bool>,
    pub results: Vec<ResultNode>,
}

/// One execution attempt's outcome
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResultNode {
    pub status: Option<String>,
    /// Milliseconds; fractional values occur in the wild
    pub duration: Option<f64>,
    pub error: Option<ErrorNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorNode {
    pub message: Option<String>,
}
