use super::common::run_suite;
use handoff::DocumentKind;

#[test]
fn builder_conformance_suite() {
    run_suite(DocumentKind::Builder, "builder.yaml");
}
