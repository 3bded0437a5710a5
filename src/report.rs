//! Rejection reports handed to whoever follows up on a refused handoff.
//!
//! A report wraps a verdict that the orchestration layer already rendered
//! to JSON, together with the status and reason it decided on. The raw
//! verdict may be anything, including garbage; the report is still built.

use crate::error::HandoffError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `run`/`work` copied from the verdict's `data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub run: Value,
    pub work: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RejectionReport {
    pub status: String,
    pub reason: String,
    pub errors: Value,
    pub data: ReportData,
}

impl RejectionReport {
    /// Builds a report from a verdict rendered as JSON.
    ///
    /// If `raw_verdict` does not parse to an object, `errors` and both
    /// `data` fields are `null`.
    pub fn from_raw(status: impl Into<String>, reason: impl Into<String>, raw_verdict: &str) -> Self {
        let payload = serde_json::from_str::<Value>(raw_verdict).ok();
        let payload = payload.as_ref().and_then(Value::as_object);

        let errors = payload
            .and_then(|p| p.get("errors"))
            .cloned()
            .unwrap_or(Value::Null);
        let data = payload.and_then(|p| p.get("data")).and_then(Value::as_object);
        let field = |key: &str| data.and_then(|d| d.get(key)).cloned().unwrap_or(Value::Null);

        RejectionReport {
            status: status.into(),
            reason: reason.into(),
            errors,
            data: ReportData {
                run: field("run"),
                work: field("work"),
            },
        }
    }

    /// Single-line JSON, non-ASCII text left as is.
    pub fn to_json(&self) -> Result<String, HandoffError> {
        serde_json::to_string(self).map_err(|source| HandoffError::Serialize {
            what: "rejection report",
            source,
        })
    }
}
