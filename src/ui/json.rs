//! JSON reporter.
//!
//! Prints nothing until the run finishes, then a single document:
//!
//! ```json
//! {
//!   "valid": false,
//!   "passed": 1,
//!   "failed": 1,
//!   "results": [
//!     { "name": "node", "expected": ">=14", "status": "passed" },
//!     { "name": "yarn", "expected": "*", "status": "unknown", "tool_name": "yarn" }
//!   ]
//! }
//! ```

use serde_json::{json, Value};

use crate::check::{CheckReport, RequirementOutcome};

use super::Reporter;

/// Writes the final report as JSON on stdout.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter.
    pub fn new() -> Self {
        Self
    }
}

/// Build the JSON document for a report.
pub fn render(report: &CheckReport) -> Value {
    json!({
        "valid": report.verdict(),
        "passed": report.passed(),
        "failed": report.failed(),
        "results": report.outcomes,
    })
}

/// Build the JSON document for a run that could not start.
pub fn render_error(msg: &str) -> Value {
    json!({
        "valid": false,
        "error": msg,
    })
}

fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => tracing::error!("Failed to serialize report: {}", e),
    }
}

impl Reporter for JsonReporter {
    fn start(&mut self, total: usize) {
        tracing::debug!("Collecting {} result(s) for JSON output", total);
    }

    fn outcome(&mut self, _entry: &RequirementOutcome) {}

    fn finish(&mut self, report: &CheckReport) {
        print(&render(report));
    }

    fn error(&mut self, msg: &str) {
        print(&render_error(msg));
    }
}
