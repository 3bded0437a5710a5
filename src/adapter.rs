//! Input adapters: bytes and files in, [`Verdict`] out.
//!
//! Acquisition failures (`file_missing`, `invalid_json`) are decided here,
//! before the rule engine runs. Their single diagnostic is located at the
//! input's file name rather than at a document field.

use crate::enums::DocumentKind;
use crate::verdict::Verdict;
use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// Deepest array/object nesting accepted from an input file.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Validates an already-parsed document.
pub fn check_value(kind: DocumentKind, doc: &Value) -> Verdict {
    Verdict::check(doc, kind)
}

/// Parses `bytes` as JSON and validates the result. `name` locates
/// parse failures, normally the file name.
///
/// Input nested deeper than [`MAX_NESTING_DEPTH`] is `invalid_json`
/// without being parsed.
pub fn check_bytes(kind: DocumentKind, name: &str, bytes: &[u8]) -> Verdict {
    if exceeds_depth(bytes, MAX_NESTING_DEPTH) {
        tracing::warn!(kind = %kind, input = name, "handoff document nests too deeply");
        return Verdict::invalid_json(
            name,
            format!("{} nests deeper than {} levels", name, MAX_NESTING_DEPTH),
        );
    }

    match parse_json(bytes) {
        Ok(doc) => check_value(kind, &doc),
        Err(e) => {
            tracing::warn!(kind = %kind, input = name, error = %e, "handoff document is not valid JSON");
            Verdict::invalid_json(name, format!("{} is not valid JSON: {}", name, e))
        }
    }
}

/// Parses without serde_json's fixed recursion limit, growing the stack
/// on demand instead. Depth is bounded by [`exceeds_depth`] beforehand.
fn parse_json(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// True if brackets outside string literals nest deeper than `max`.
fn exceeds_depth(bytes: &[u8], max: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &b in bytes {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > max {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

pub fn check_str(kind: DocumentKind, name: &str, input: &str) -> Verdict {
    check_bytes(kind, name, input.as_bytes())
}

/// Reads and validates the document at `path`.
///
/// A missing file is `file_missing`. Other read failures (permissions, a
/// directory in place of the file) are reported the same way, with the
/// I/O error in the message.
pub fn check_file(kind: DocumentKind, path: &Path) -> Verdict {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match std::fs::read(path) {
        Ok(bytes) => check_bytes(kind, &name, &bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(kind = %kind, path = %path.display(), "handoff document not found");
            Verdict::file_missing(&name, format!("{} not found in worktree root", name))
        }
        Err(e) => {
            tracing::warn!(kind = %kind, path = %path.display(), error = %e, "handoff document unreadable");
            Verdict::file_missing(&name, format!("{} could not be read: {}", name, e))
        }
    }
}

/// Validates the document a stage leaves in its worktree root,
/// e.g. `<worktree>/builder_result.json`.
pub fn check_worktree(kind: DocumentKind, worktree: &Path) -> Verdict {
    check_file(kind, &worktree.join(kind.file_name()))
}
