//! Common fixtures for tgbots-methods integration tests
//!
//! Canned Bot API answers and small helpers shared by the test files.

#![allow(dead_code)]

use serde_json::{Map, Value};

/// Successful envelope wrapping `result`
pub fn ok_answer(result: Value) -> String {
    serde_json::json!({"ok": true, "result": result}).to_string()
}

/// Failure envelope with an error code and description
pub fn error_answer(code: i32, description: &str) -> String {
    serde_json::json!({"ok": false, "error_code": code, "description": description}).to_string()
}

/// Failure envelope asking the caller to back off
pub fn flood_answer(retry_after: i32) -> String {
    serde_json::json!({
        "ok": false,
        "error_code": 429,
        "description": format!("Too Many Requests: retry after {}", retry_after),
        "parameters": {"retry_after": retry_after}
    })
    .to_string()
}

/// Sorted keys of an encoded parameter object
pub fn sorted_keys(params: &Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = params.keys().cloned().collect();
    keys.sort();
    keys
}

/// A small JPEG header, enough to stand in for an upload
pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46]
}
