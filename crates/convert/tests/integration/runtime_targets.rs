//! Integration test: targets chosen at runtime

use nebula_convert::prelude::*;
use nebula_convert::{convert_json_to, detect_target};
use pretty_assertions::assert_eq;

/// A column schema that only knows its types at runtime
fn schema() -> Vec<(&'static str, Target)> {
    vec![
        ("id", Target::U32),
        ("name", Target::String),
        ("active", Target::Bool),
        ("score", Target::F32),
        ("tags", Target::slice(Target::String)),
        ("manager", Target::pointer(Target::U32)),
    ]
}

#[test]
fn test_row_conversion() {
    let row = [
        Value::from("17"),
        Value::from(42),
        Value::from("yes"),
        Value::from("0.5"),
        Value::from(r#"["a", 1]"#),
        Value::Null,
    ];

    let converted: Vec<Value> = schema()
        .iter()
        .zip(&row)
        .map(|((_, target), cell)| convert_to(cell, target, &[]).unwrap())
        .collect();

    assert_eq!(
        converted,
        vec![
            Value::U32(17),
            Value::from("42"),
            Value::Bool(true),
            Value::F32(0.5),
            Value::array(["a", "1"]),
            Value::null_pointer(ValueKind::U32),
        ]
    );

    for ((_, target), value) in schema().iter().zip(&converted) {
        assert_eq!(value.kind(), target.kind());
    }
}

#[test]
fn test_row_error_names_target() {
    let err = convert_to(&Value::from("-1"), &Target::U32, &[]).unwrap_err();
    assert_eq!(err.to_string(), "value -1 overflows u32");
}

#[test]
fn test_detect_then_convert() {
    let inputs = [
        Value::from("42"),
        Value::from("4.2"),
        Value::from("on"),
        Value::from("2024-02-29"),
        Value::from("250ms"),
        Value::from("plain"),
    ];
    let detected: Vec<Target> = inputs.iter().filter_map(detect_target).collect();
    assert_eq!(
        detected,
        vec![
            Target::I64,
            Target::F64,
            Target::Bool,
            Target::Time,
            Target::Duration,
            Target::String,
        ]
    );

    for (input, target) in inputs.iter().zip(&detected) {
        let converted = convert_to(input, target, &[]).unwrap();
        assert_eq!(converted.kind(), target.kind());
    }
}

#[test]
fn test_json_typed_decode() {
    let v = convert_json_to(&Value::from("[1.5, 2]"), &Target::slice(Target::F64), &[]).unwrap();
    assert_eq!(v, Value::array([1.5_f64, 2.0]));
}
