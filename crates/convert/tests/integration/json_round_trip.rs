//! Integration test: JSON helpers and Value <-> JSON bridging

use std::collections::BTreeMap;

use nebula_convert::json::{
    from_json_e, to_json_e, to_json_indent_string_e, to_json_string_e, to_json_string_or_panic,
};
use nebula_convert::prelude::*;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Job {
    id: u64,
    name: String,
    enabled: bool,
    weights: Vec<f64>,
    labels: BTreeMap<String, String>,
    timeout_ms: Option<u32>,
}

fn job() -> Job {
    Job {
        id: u64::MAX,
        name: "nightly \"sync\"".into(),
        enabled: true,
        weights: vec![0.25, -1.5, 1e-9],
        labels: BTreeMap::from([("team".into(), "data".into())]),
        timeout_ms: None,
    }
}

#[test]
fn test_struct_round_trip() {
    let original = job();
    let text = to_json_string_e(&original).unwrap();
    let decoded: Job = from_json_e(&Value::from(text), &[]).unwrap();
    assert_eq!(decoded, original);

    let pretty = to_json_indent_string_e(&original).unwrap();
    assert!(pretty.contains("\n  \"id\": 18446744073709551615"));
    let decoded: Job = from_json_e(&Value::from(pretty), &[]).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_decode_through_pointer_and_bytes() {
    let bytes = to_json_e(&job()).unwrap();
    let decoded: Job = from_json_e(&Value::pointer(Value::bytes(bytes)), &[]).unwrap();
    assert_eq!(decoded, job());
}

#[test]
fn test_value_from_json_and_back() {
    let source = json!({"a": [1, -2, 2.5, "x", null, true], "b": {"c": 18446744073709551615_u64}});
    let value = Value::from(source.clone());
    assert_eq!(serde_json::to_value(&value).unwrap(), source);
    assert_eq!(to_u64_e(&Value::from(source["b"]["c"].clone()), &[]).unwrap(), u64::MAX);
}

#[test]
fn test_nil_is_rejected() {
    assert!(to_json_e(&Value::Null).is_err());
    assert_eq!(to_json_string_e(&Value::from(0)).unwrap(), "0");
}

#[test]
#[should_panic(expected = "nil is not allowed")]
fn test_or_panic() {
    to_json_string_or_panic(&Option::<Job>::None);
}
