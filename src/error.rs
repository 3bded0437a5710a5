use crate::path::FieldPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable class of a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    TypeError,
    Required,
    InvalidEnum,
    Invalid,
    FileMissing,
    InvalidJson,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::TypeError => "type_error",
            DiagnosticCode::Required => "required",
            DiagnosticCode::InvalidEnum => "invalid_enum",
            DiagnosticCode::Invalid => "invalid",
            DiagnosticCode::FileMissing => "file_missing",
            DiagnosticCode::InvalidJson => "invalid_json",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contract violation, qualified by the field path it concerns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub path: String,
    pub code: DiagnosticCode,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.path, self.message)
    }
}

/// Ordered, append-only collection of diagnostics for one validation pass.
///
/// Nothing is deduplicated; the order is the order rules ran in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &FieldPath, code: DiagnosticCode, message: impl Into<String>) {
        self.record_at(path.as_str(), code, message);
    }

    /// Records against a location that is not a field of the document,
    /// such as the input file name.
    pub fn record_at(&mut self, path: impl Into<String>, code: DiagnosticCode, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            path: path.into(),
            code,
            message: message.into(),
        });
    }

    /// True iff nothing has been recorded.
    pub fn is_ok(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Failures outside the verdict itself.
///
/// A non-conforming document is never an error: it is an
/// `invalid_schema` verdict. These cover the plumbing around it.
#[derive(Debug, thiserror::Error)]
pub enum HandoffError {
    #[error("unknown document kind '{0}', expected 'builder' or 'inspector'")]
    UnknownKind(String),

    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {what}: {source}")]
    Write {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },
}
