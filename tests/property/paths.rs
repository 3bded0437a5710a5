use super::strategies::*;
use handoff::path::FieldPath;
use handoff::{DocumentKind, validate};
use proptest::prelude::*;
use serde_json::Value;
use serde_json_path::JsonPath;

/// Strips the last segment of a rendered field path. `None` for the root.
fn parent(path: &str) -> Option<&str> {
    if path == "<root>" {
        return None;
    }
    let cut = path.rfind(['.', '[']).unwrap_or(0);
    Some(&path[..cut])
}

/// True if `path` (rendered) names exactly one node of `doc`.
fn resolves(doc: &Value, path: &str) -> bool {
    let query = if path.is_empty() {
        "$".to_string()
    } else {
        format!("$.{}", path)
    };
    JsonPath::parse(&query)
        .map(|p| p.query(doc).exactly_one().is_ok())
        .unwrap_or(false)
}

fn diagnostic_parents_resolve(doc: &Value, kind: DocumentKind) -> Result<(), TestCaseError> {
    for d in &validate(doc, kind) {
        if let Some(parent) = parent(&d.path) {
            prop_assert!(
                resolves(doc, parent),
                "parent '{}' of '{}' not found in {}",
                parent,
                d.path,
                doc
            );
        }
    }
    Ok(())
}

proptest! {
    /// Every diagnostic points at a field whose container exists in the input.
    #[test]
    fn builder_paths_resolve(doc in arb_document(arb_builder_work())) {
        diagnostic_parents_resolve(&doc, DocumentKind::Builder)?;
    }

    #[test]
    fn inspector_paths_resolve(doc in arb_document(arb_inspector_work())) {
        diagnostic_parents_resolve(&doc, DocumentKind::Inspector)?;
    }

    #[test]
    fn descend_then_index_renders_brackets(key in "[a-z_]{1,8}", index in 0usize..100) {
        let path = FieldPath::root().descend("work").descend(&key).descend_index(index);
        prop_assert_eq!(path.to_string(), format!("work.{}[{}]", key, index));
    }
}

#[test]
fn root_renders_literal_token() {
    assert_eq!(FieldPath::root().to_string(), "<root>");
    assert!(FieldPath::root().is_root());
    assert_eq!(FieldPath::root().descend("run").to_string(), "run");
    assert_eq!(
        FieldPath::root().descend("work").descend("issues").descend_index(3).descend("severity").as_str(),
        "work.issues[3].severity"
    );
}
