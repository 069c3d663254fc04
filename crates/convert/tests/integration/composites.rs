//! Integration test: sequences, maps and optional values

use std::collections::BTreeMap;

use nebula_convert::prelude::*;
use nebula_convert::{
    ConvertError, convert_e, to_map_e, to_multimap_e, to_multimap_or, to_vec_e,
    to_vec_or,
};
use pretty_assertions::assert_eq;

#[test]
fn test_vec_reports_failing_index() {
    let v = Value::array([Value::from(1), Value::from("bad"), Value::from(3)]);
    let err = to_vec_e::<i64>(&v, &[]).unwrap_err();
    match &err {
        ConvertError::Element { index, source } => {
            assert_eq!(*index, 1);
            assert!(source.is_unparseable());
        }
        other => panic!("expected element error, got {other:?}"),
    }
}

#[test]
fn test_vec_from_json_text() {
    let ports = to_vec_e::<u16>(&Value::from("[80, \"443\", 8080.0]"), &[]).unwrap();
    assert_eq!(ports, vec![80, 443, 8080]);
    assert_eq!(to_vec_or(&Value::from(""), vec![22_u16], &[]), vec![22]);
}

#[test]
fn test_vec_of_values() {
    let items = to_vec_e::<Value>(&Value::from(r#"[1, "a", null]"#), &[]).unwrap();
    assert_eq!(items, vec![Value::I64(1), Value::from("a"), Value::Null]);
}

#[test]
fn test_map_sources() {
    let object = Value::object([("a", Value::from("1")), ("b", Value::from(2_u8))]);
    let expected = BTreeMap::from([("a".to_owned(), 1_i64), ("b".to_owned(), 2)]);
    assert_eq!(to_map_e::<i64>(&object, &[]).unwrap(), expected);

    let arbitrary = Value::map([
        (Value::from("a"), Value::from(1)),
        (Value::from("b"), Value::from(2)),
    ]);
    assert_eq!(to_map_e::<i64>(&arbitrary, &[]).unwrap(), expected);

    let text = Value::from(r#"{"a": 1, "b": "2"}"#);
    assert_eq!(to_map_e::<i64>(&text, &[]).unwrap(), expected);
}

#[test]
fn test_nested_error_path() {
    let v = Value::from(r#"{"servers": {"web": [80, 70000]}}"#);
    let err = convert_e::<BTreeMap<String, BTreeMap<String, Vec<u16>>>>(&v, &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "entry at key 'servers': entry at key 'web': element at index 1: value 70000 overflows u16"
    );
    assert_eq!(err.code(), "CONVERT_OVERFLOW");
}

#[test]
fn test_multimap() {
    let v = Value::object([
        ("accept", Value::array(["json", "xml"])),
        ("host", Value::from("example.org")),
    ]);
    let headers = to_multimap_e::<String>(&v, &[]).unwrap();
    assert_eq!(headers["accept"], vec!["json".to_owned(), "xml".to_owned()]);
    assert_eq!(headers["host"], vec!["example.org".to_owned()]);

    let fallback = BTreeMap::from([("host".to_owned(), vec!["localhost".to_owned()])]);
    assert_eq!(to_multimap_or::<String>(&Value::Null, fallback.clone(), &[]), fallback);
}

#[test]
fn test_optional_values() {
    assert_eq!(convert_e::<Option<u8>>(&Value::Null, &[]).unwrap(), None);
    assert_eq!(
        convert_e::<Option<u8>>(&Value::null_pointer(ValueKind::U8), &[]).unwrap(),
        None
    );
    assert_eq!(convert_e::<Option<u8>>(&Value::pointer(7), &[]).unwrap(), Some(7));
    assert!(convert_e::<Option<u8>>(&Value::from(-7), &[]).is_err());

    let sparse = Value::array([Value::from(1), Value::Null, Value::from("3")]);
    assert_eq!(
        to_vec_e::<Option<i32>>(&sparse, &[]).unwrap(),
        vec![Some(1), None, Some(3)]
    );
}
