use proptest::prelude::*;
use serde_json::{Value, json};

/// Strategy for arbitrary JSON values nested up to `depth` levels.
pub fn arb_json(depth: u32) -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|i| json!(i)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ];

    leaf.prop_recursive(depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z_]{1,8}", inner), 1..5).prop_map(|pairs| {
                let map: serde_json::Map<String, Value> = pairs.into_iter().collect();
                Value::Object(map)
            }),
        ]
    })
}

/// Mostly-plausible text: sometimes blank, sometimes not a string.
pub fn arb_text() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => "[a-z]{1,6}( [a-z]{1,6})?".prop_map(Value::String),
        1 => "[ \t]{0,3}".prop_map(Value::String),
        1 => Just(Value::Null),
        1 => any::<i32>().prop_map(|i| json!(i)),
    ]
}

fn arb_enum(valid: &'static [&'static str]) -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => prop::sample::select(valid).prop_map(|s| json!(s)),
        1 => Just(json!("unknown")),
        1 => Just(Value::Null),
        1 => Just(json!(3)),
    ]
}

pub fn arb_string_list() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => prop::collection::vec(arb_text(), 0..4).prop_map(Value::Array),
        1 => arb_json(1),
    ]
}

pub fn arb_issue() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (arb_enum(&["blocker", "major", "minor"]), arb_text(), arb_string_list())
            .prop_map(|(severity, description, paths)| {
                json!({"severity": severity, "description": description, "paths": paths})
            }),
        1 => arb_json(1),
    ]
}

pub fn arb_run() -> impl Strategy<Value = Value> {
    prop_oneof![
        5 => (arb_enum(&["ok", "failed"]), arb_text(), arb_text())
            .prop_map(|(status, failed_step, error)| {
                json!({"status": status, "failed_step": failed_step, "error": error})
            }),
        1 => arb_json(1),
    ]
}

pub fn arb_builder_work() -> impl Strategy<Value = Value> {
    prop_oneof![
        5 => (arb_text(), arb_enum(&["low", "medium", "high"]))
            .prop_map(|(summary, complexity)| json!({"summary": summary, "complexity": complexity})),
        1 => arb_json(1),
    ]
}

pub fn arb_inspector_work() -> impl Strategy<Value = Value> {
    prop_oneof![
        5 => (
            arb_enum(&["approved", "changes_requested"]),
            prop_oneof![
                4 => prop::collection::vec(arb_issue(), 0..4).prop_map(Value::Array),
                1 => arb_json(1),
            ],
            arb_string_list(),
        )
            .prop_map(|(status, issues, next_tasks)| {
                json!({"status": status, "issues": issues, "next_tasks": next_tasks})
            }),
        1 => arb_json(1),
    ]
}

/// A handoff-shaped document with plausible and broken parts mixed.
pub fn arb_document(work: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop_oneof![
        8 => (arb_run(), work).prop_map(|(run, work)| json!({"run": run, "work": work})),
        1 => arb_json(2),
    ]
}

// ─── Labelled fields: each value paired with whether it should pass ─────────

pub fn labelled_enum(valid: &'static [&'static str]) -> impl Strategy<Value = (Value, bool)> {
    prop_oneof![
        2 => prop::sample::select(valid).prop_map(|s| (json!(s), true)),
        1 => prop_oneof![Just(json!("unknown")), Just(Value::Null), Just(json!(7)), Just(json!([]))]
            .prop_map(|v| (v, false)),
    ]
}

pub fn labelled_text() -> impl Strategy<Value = (Value, bool)> {
    prop_oneof![
        2 => "[a-z]{1,6}".prop_map(|s| (Value::String(s), true)),
        1 => prop_oneof![
            "[ \t]{0,3}".prop_map(Value::String),
            Just(Value::Null),
            any::<i32>().prop_map(|i| json!(i)),
        ]
        .prop_map(|v| (v, false)),
    ]
}

pub fn labelled_string_list() -> impl Strategy<Value = (Value, bool)> {
    prop_oneof![
        2 => prop::collection::vec("[a-z]{1,6}", 0..4)
            .prop_map(|items| (json!(items), true)),
        1 => prop_oneof![
            prop::collection::vec("[a-z]{1,6}", 0..3).prop_map(|mut items| {
                items.push("  ".to_string());
                json!(items)
            }),
            Just(json!(["ok", 1])),
            Just(json!("not a list")),
            Just(Value::Null),
        ]
        .prop_map(|v| (v, false)),
    ]
}

/// An issue element and the number of diagnostics it must produce.
pub fn labelled_issue() -> impl Strategy<Value = (Value, usize)> {
    prop_oneof![
        4 => (
            labelled_enum(&["blocker", "major", "minor"]),
            labelled_text(),
            labelled_string_list(),
        )
            .prop_map(|((severity, s_ok), (description, d_ok), (paths, p_ok))| {
                let bad = [s_ok, d_ok, p_ok].iter().filter(|ok| !**ok).count();
                (json!({"severity": severity, "description": description, "paths": paths}), bad)
            }),
        1 => prop_oneof![Just(Value::Null), Just(json!("issue")), Just(json!([{}]))]
            .prop_map(|v| (v, 1)),
    ]
}
