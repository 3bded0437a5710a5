//! Assembles the terminal [`Verdict`] for one handoff document.
//!
//! The verdict is the only thing the orchestration layer looks at. It is
//! always well-formed: acquisition failures, contract violations and
//! success all come back as data.

use crate::enums::{DocumentKind, VerdictStatus};
use crate::error::{Diagnostic, DiagnosticCode, Diagnostics, HandoffError};
use crate::types::{RunBlock, WorkBlock};
use crate::validate::{WorkRules, rules_for, validate_with};
use crate::value::provided;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Allow-listed echo of an accepted document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictData {
    pub run: Option<RunBlock>,
    pub work: Option<WorkBlock>,
}

/// Complete validation outcome.
///
/// `status` is [`VerdictStatus::Valid`] iff `errors` is empty, and `data`
/// is only populated for valid documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub errors: Vec<Diagnostic>,
    pub data: VerdictData,
}

impl Verdict {
    /// Runs the rule engine on `doc` and assembles the result.
    pub fn check(doc: &Value, kind: DocumentKind) -> Self {
        Self::check_with(doc, rules_for(kind))
    }

    pub fn check_with(doc: &Value, rules: &dyn WorkRules) -> Self {
        let diags = validate_with(doc, rules);
        Self::assemble(doc, rules, diags)
    }

    /// Maps a finished validation pass onto a verdict.
    pub fn assemble(doc: &Value, rules: &dyn WorkRules, diags: Diagnostics) -> Self {
        if !diags.is_ok() {
            return Self::rejected(VerdictStatus::InvalidSchema, diags.into_vec());
        }

        match project(doc, rules) {
            Ok(data) => Verdict {
                status: VerdictStatus::Valid,
                errors: Vec::new(),
                data,
            },
            Err(e) => {
                tracing::error!(kind = %rules.kind(), error = %e, "accepted document failed projection");
                let mut diags = Diagnostics::new();
                diags.record_at(
                    crate::path::ROOT,
                    DiagnosticCode::Invalid,
                    format!("accepted document could not be projected: {}", e),
                );
                Self::rejected(VerdictStatus::InvalidSchema, diags.into_vec())
            }
        }
    }

    /// Verdict for a document that could not be found or read.
    pub fn file_missing(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::acquisition_failure(VerdictStatus::FileMissing, DiagnosticCode::FileMissing, location, message)
    }

    /// Verdict for a document that is not well-formed JSON.
    pub fn invalid_json(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::acquisition_failure(VerdictStatus::InvalidJson, DiagnosticCode::InvalidJson, location, message)
    }

    fn acquisition_failure(
        status: VerdictStatus,
        code: DiagnosticCode,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut diags = Diagnostics::new();
        diags.record_at(location, code, message);
        Self::rejected(status, diags.into_vec())
    }

    fn rejected(status: VerdictStatus, errors: Vec<Diagnostic>) -> Self {
        Verdict {
            status,
            errors,
            data: VerdictData::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == VerdictStatus::Valid
    }

    /// Single-line JSON rendering.
    pub fn to_json(&self) -> Result<String, HandoffError> {
        serde_json::to_string(self).map_err(|source| HandoffError::Serialize {
            what: "verdict",
            source,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, HandoffError> {
        serde_json::to_string_pretty(self).map_err(|source| HandoffError::Serialize {
            what: "verdict",
            source,
        })
    }
}

/// Projects `run` and `work` of an accepted document onto the recognized
/// fields. Anything else in the input is dropped.
fn project(doc: &Value, rules: &dyn WorkRules) -> Result<VerdictData, serde_json::Error> {
    let Value::Object(obj) = doc else {
        return Ok(VerdictData::default());
    };

    let run = match obj.get("run") {
        Some(run @ Value::Object(_)) => Some(RunBlock::deserialize(run)?),
        _ => None,
    };
    let work = match provided(obj, "work") {
        Some(work @ Value::Object(_)) => Some(rules.project(work)?),
        _ => None,
    };

    Ok(VerdictData { run, work })
}
