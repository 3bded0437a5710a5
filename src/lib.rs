//! Contract validator for pipeline handoff documents.
//!
//! A *builder* stage and an *inspector* stage each leave a JSON result in
//! their worktree. Before any downstream automation consumes it, the
//! document is checked against the stage's contract and turned into a
//! [`Verdict`]:
//!
//! ```text
//! bytes/file → adapter → Value → validate(doc, kind) → Diagnostics
//!                                                    → Verdict { status, errors, data }
//! ```
//!
//! Validation is exhaustive: every independent violation is reported with
//! the field path it concerns, e.g. `work.issues[2].severity`.
//!
//! # Quick Start
//!
//! ```rust
//! use handoff::{DocumentKind, VerdictStatus};
//!
//! let input = r#"{"run":{"status":"ok"},"work":{"summary":"done","complexity":"low"}}"#;
//! let verdict = handoff::check_str(DocumentKind::Builder, "builder_result.json", input);
//! assert_eq!(verdict.status, VerdictStatus::Valid);
//! assert!(verdict.errors.is_empty());
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | yes     | Builds the `handoff` binary (`clap`, `anyhow`, `tracing-subscriber`). |

pub mod adapter;
pub mod enums;
pub mod error;
pub mod path;
pub mod report;
pub mod types;
pub mod validate;
pub mod value;
pub mod verdict;

pub use enums::*;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use adapter::{check_bytes, check_file, check_str, check_value, check_worktree};
pub use path::FieldPath;
pub use report::RejectionReport;
pub use validate::validate;
pub use verdict::{Verdict, VerdictData};
