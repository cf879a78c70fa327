//! Shared test utilities for the branchguard workspace.
//!
//! Lives in its own crate so the CLI integration tests can depend on it.

use serde_json::Value;

/// Normalize non-deterministic JSON fields of a gate report for golden comparison.
///
/// - `tool.version` becomes `"__VERSION__"`, but only on a root object that looks like a
///   report envelope (`schema`, `tool`, `run`, `verdict` and `messages` all present).
/// - `run.started_at` / `run.ended_at` become `"__TIMESTAMP__"` and `run.duration_ms` becomes `0`.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_envelope = ["schema", "tool", "run", "verdict", "messages"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String("__VERSION__".to_string()),
        );
    }

    if let Some(run) = obj.get_mut("run").and_then(Value::as_object_mut) {
        for key in ["started_at", "ended_at"] {
            if run.contains_key(key) {
                run.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
            }
        }
        if run.contains_key("duration_ms") {
            run.insert("duration_ms".to_string(), Value::Number(0.into()));
        }
    }

    value
}

/// Text of every message in a report, in emission order.
pub fn message_texts(report: &Value) -> Vec<String> {
    report["messages"]
        .as_array()
        .map(|msgs| {
            msgs.iter()
                .filter_map(|m| m["text"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
