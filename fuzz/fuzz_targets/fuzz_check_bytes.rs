#![no_main]

use handoff::{DocumentKind, VerdictStatus};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for kind in [DocumentKind::Builder, DocumentKind::Inspector] {
        let verdict = handoff::check_bytes(kind, kind.file_name(), data);
        assert_eq!(verdict.status == VerdictStatus::Valid, verdict.errors.is_empty());
        let _ = verdict.to_json();
    }
});
