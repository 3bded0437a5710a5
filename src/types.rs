//! Typed projections of an accepted handoff document.
//!
//! These structs are never used to *check* input; the rule engine works on
//! the raw value. Once a document is accepted, its `run` and `work`
//! subtrees are deserialized into these types, and because serde ignores
//! unknown fields, the verdict echo carries only the fields listed here.

use crate::enums::*;
use serde::{Deserialize, Serialize};

/// The `run` block shared by both document kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunBlock {
    pub status: RunStatus,
    #[serde(default)]
    pub failed_step: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// `work` block of a builder result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderWork {
    pub summary: String,
    pub complexity: Complexity,
}

/// `work` block of an inspector result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectorWork {
    pub status: ReviewStatus,
    pub issues: Vec<Issue>,
    pub next_tasks: Vec<String>,
}

/// One problem the inspector found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub description: String,
    pub paths: Vec<String>,
}

/// Kind-specific `work` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkBlock {
    Builder(BuilderWork),
    Inspector(InspectorWork),
}
