//! Closed enumerations of the handoff contract.
//!
//! Every enum here is closed: the listed variants are the only accepted
//! values. The rule engine checks membership against `VALUES` on the raw
//! document, then the typed variants carry the accepted value into the
//! verdict echo.

use crate::error::HandoffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Accepted wire values, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            /// Parses a wire value; `None` for anything outside `VALUES`.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum! {
    /// Outcome a stage reports for its own run.
    RunStatus { Ok => "ok", Failed => "failed" }
}

closed_enum! {
    /// Builder's estimate of how involved the change was.
    Complexity { Low => "low", Medium => "medium", High => "high" }
}

closed_enum! {
    /// Inspector's decision on the builder's work.
    ReviewStatus { Approved => "approved", ChangesRequested => "changes_requested" }
}

closed_enum! {
    /// Severity of a single inspector issue.
    Severity { Blocker => "blocker", Major => "major", Minor => "minor" }
}

closed_enum! {
    /// Terminal status of a [`Verdict`](crate::verdict::Verdict).
    VerdictStatus {
        Valid => "valid",
        InvalidSchema => "invalid_schema",
        InvalidJson => "invalid_json",
        FileMissing => "file_missing",
    }
}

closed_enum! {
    /// Which pipeline stage produced the document. Selects the work-block rules.
    DocumentKind { Builder => "builder", Inspector => "inspector" }
}

impl DocumentKind {
    /// Name the document goes by in messages, e.g. `builder_result`.
    pub fn document_name(self) -> &'static str {
        match self {
            DocumentKind::Builder => "builder_result",
            DocumentKind::Inspector => "inspector_result",
        }
    }

    /// File the stage writes into its worktree root.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Builder => "builder_result.json",
            DocumentKind::Inspector => "inspector_result.json",
        }
    }
}

impl FromStr for DocumentKind {
    type Err = HandoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::from_name(s).ok_or_else(|| HandoffError::UnknownKind(s.to_string()))
    }
}
