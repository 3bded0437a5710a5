//! Contract rules for builder and inspector handoff documents.
//!
//! Returns **all** violations, not just the first. Rules run in a fixed
//! order so the diagnostic list is reproducible:
//!
//! 1. the root must be an object (otherwise nothing else is checked);
//! 2. the `run` block's `status`, `failed_step` and `error`;
//! 3. `work` presence, branching on `run.status`;
//! 4. the kind-specific `work` fields, via [`WorkRules`].
//!
//! Validation never modifies the document and never panics, whatever its
//! shape.

use crate::enums::*;
use crate::error::{DiagnosticCode, Diagnostics};
use crate::path::FieldPath;
use crate::types::*;
use crate::value::*;
use serde::Deserialize;
use serde_json::Value;

/// Kind-specific rules for the `work` block.
///
/// The shared procedure in [`validate_with`] decides *whether* `work` is
/// checked at all; implementations only see a `work` that is an object
/// on a successful run.
pub trait WorkRules: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Checks every field of `work`. Each field check must run regardless
    /// of whether an earlier one failed.
    fn check(&self, work: &Object, path: &FieldPath, diags: &mut Diagnostics);

    /// Projects an accepted `work` value onto the recognized fields.
    fn project(&self, work: &Value) -> Result<WorkBlock, serde_json::Error>;
}

/// Rules for `builder_result.json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuilderRules;

/// Rules for `inspector_result.json`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InspectorRules;

static BUILDER: BuilderRules = BuilderRules;
static INSPECTOR: InspectorRules = InspectorRules;

/// The rule set for `kind`.
pub fn rules_for(kind: DocumentKind) -> &'static dyn WorkRules {
    match kind {
        DocumentKind::Builder => &BUILDER,
        DocumentKind::Inspector => &INSPECTOR,
    }
}

/// Validate `doc` as a document of the given kind.
pub fn validate(doc: &Value, kind: DocumentKind) -> Diagnostics {
    validate_with(doc, rules_for(kind))
}

/// Validate `doc` with an explicit work-block rule set.
pub fn validate_with(doc: &Value, rules: &dyn WorkRules) -> Diagnostics {
    let mut diags = Diagnostics::new();
    let root = FieldPath::root();

    match doc {
        Value::Object(obj) => {
            let run_status = check_run(obj, &root, &mut diags);
            check_work(obj, run_status, rules, &root, &mut diags);
        }
        other => {
            tracing::debug!(shape = shape_name(other), "handoff document root is not an object");
            diags.record(
                &root,
                DiagnosticCode::TypeError,
                format!("{} must be a JSON object", rules.kind().document_name()),
            );
        }
    }

    tracing::debug!(
        kind = %rules.kind(),
        diagnostics = diags.len(),
        "validated handoff document"
    );
    diags
}

// ─── Run block ──────────────────────────────────────────────────────────────

/// Checks `run` and returns its status, or `None` when it is undetermined.
fn check_run(doc: &Object, root: &FieldPath, diags: &mut Diagnostics) -> Option<RunStatus> {
    let path = root.descend("run");
    let Some(Value::Object(run)) = doc.get("run") else {
        diags.record(&path, DiagnosticCode::Required, "run must be an object");
        return None;
    };

    let status = enum_member(run.get("status"), RunStatus::VALUES).and_then(RunStatus::from_name);
    if status.is_none() {
        diags.record(
            &path.descend("status"),
            DiagnosticCode::InvalidEnum,
            "run.status must be 'ok' or 'failed'",
        );
    }

    for field in ["failed_step", "error"] {
        if !is_optional_string(run.get(field)) {
            diags.record(
                &path.descend(field),
                DiagnosticCode::TypeError,
                format!("run.{} must be a string or null", field),
            );
        }
    }

    status
}

// ─── Work presence ──────────────────────────────────────────────────────────

fn check_work(
    doc: &Object,
    run_status: Option<RunStatus>,
    rules: &dyn WorkRules,
    root: &FieldPath,
    diags: &mut Diagnostics,
) {
    let path = root.descend("work");
    let work = provided(doc, "work");

    match run_status {
        // The run block is already reported; work rules would only add noise.
        None => {}
        Some(RunStatus::Failed) => {
            if work.is_some() {
                diags.record(
                    &path,
                    DiagnosticCode::Invalid,
                    "work must be null when run.status is 'failed'",
                );
            }
        }
        Some(RunStatus::Ok) => match work {
            Some(Value::Object(work)) => rules.check(work, &path, diags),
            _ => diags.record(
                &path,
                DiagnosticCode::Required,
                "work must be an object when run.status is 'ok'",
            ),
        },
    }
}

// ─── Builder ────────────────────────────────────────────────────────────────

impl WorkRules for BuilderRules {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Builder
    }

    fn check(&self, work: &Object, path: &FieldPath, diags: &mut Diagnostics) {
        if non_blank_str(work.get("summary")).is_none() {
            diags.record(
                &path.descend("summary"),
                DiagnosticCode::Required,
                "work.summary must be a non-empty string",
            );
        }

        if enum_member(work.get("complexity"), Complexity::VALUES).is_none() {
            diags.record(
                &path.descend("complexity"),
                DiagnosticCode::InvalidEnum,
                "work.complexity must be one of 'low', 'medium', 'high'",
            );
        }
    }

    fn project(&self, work: &Value) -> Result<WorkBlock, serde_json::Error> {
        BuilderWork::deserialize(work).map(WorkBlock::Builder)
    }
}

// ─── Inspector ──────────────────────────────────────────────────────────────

impl WorkRules for InspectorRules {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Inspector
    }

    fn check(&self, work: &Object, path: &FieldPath, diags: &mut Diagnostics) {
        let status =
            enum_member(work.get("status"), ReviewStatus::VALUES).and_then(ReviewStatus::from_name);
        if status.is_none() {
            diags.record(
                &path.descend("status"),
                DiagnosticCode::InvalidEnum,
                "work.status must be 'approved' or 'changes_requested'",
            );
        }

        let issues_path = path.descend("issues");
        match work.get("issues") {
            Some(Value::Array(issues)) => {
                if issues.is_empty() && status == Some(ReviewStatus::ChangesRequested) {
                    diags.record(
                        &issues_path,
                        DiagnosticCode::Required,
                        "work.issues must be non-empty when work.status is 'changes_requested'",
                    );
                }
                for (i, issue) in issues.iter().enumerate() {
                    check_issue(issue, &issues_path.descend_index(i), diags);
                }
            }
            _ => diags.record(
                &issues_path,
                DiagnosticCode::TypeError,
                "work.issues must be an array",
            ),
        }

        if !is_non_blank_string_array(work.get("next_tasks")) {
            diags.record(
                &path.descend("next_tasks"),
                DiagnosticCode::TypeError,
                "work.next_tasks must be an array of non-empty strings",
            );
        }
    }

    fn project(&self, work: &Value) -> Result<WorkBlock, serde_json::Error> {
        InspectorWork::deserialize(work).map(WorkBlock::Inspector)
    }
}

/// A malformed element stops here; its siblings are still checked.
fn check_issue(issue: &Value, path: &FieldPath, diags: &mut Diagnostics) {
    let Value::Object(issue) = issue else {
        diags.record(path, DiagnosticCode::TypeError, "each issue must be an object");
        return;
    };

    if enum_member(issue.get("severity"), Severity::VALUES).is_none() {
        diags.record(
            &path.descend("severity"),
            DiagnosticCode::InvalidEnum,
            "severity must be 'blocker', 'major', or 'minor'",
        );
    }

    if non_blank_str(issue.get("description")).is_none() {
        diags.record(
            &path.descend("description"),
            DiagnosticCode::Required,
            "description must be a non-empty string",
        );
    }

    // One diagnostic for the whole field, however many entries are bad.
    if !is_non_blank_string_array(issue.get("paths")) {
        diags.record(
            &path.descend("paths"),
            DiagnosticCode::TypeError,
            "paths must be an array of non-empty strings",
        );
    }
}
