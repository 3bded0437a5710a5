//! Field paths that qualify every diagnostic.
//!
//! Object fields are dot-joined (`work.summary`), array elements are
//! bracketed (`work.issues[2]`). The document root renders as `<root>`.

use std::fmt;

/// Literal rendering of the document root.
pub const ROOT: &str = "<root>";

/// A location inside a handoff document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    // Empty for the root.
    rendered: String,
}

impl FieldPath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Path of the object field `key` under `self`.
    pub fn descend(&self, key: &str) -> Self {
        let rendered = if self.is_root() {
            key.to_string()
        } else {
            format!("{}.{}", self.rendered, key)
        };
        Self { rendered }
    }

    /// Path of the array element `index` under `self`.
    pub fn descend_index(&self, index: usize) -> Self {
        Self {
            rendered: format!("{}[{}]", self.rendered, index),
        }
    }

    /// The rendered path, `<root>` for the root.
    pub fn as_str(&self) -> &str {
        if self.is_root() { ROOT } else { &self.rendered }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&FieldPath> for String {
    fn from(path: &FieldPath) -> Self {
        path.as_str().to_string()
    }
}
