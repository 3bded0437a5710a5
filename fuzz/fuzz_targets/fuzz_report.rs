#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let report = handoff::RejectionReport::from_raw("rejected", "fuzz", &s);
    let _ = report.to_json();
});
