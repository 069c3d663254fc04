//! Integration test: caller-supplied converters
//!
//! Domain types reach the conversion functions as opaque payloads; converters
//! teach the crate how to read them.

use std::collections::BTreeMap;

use nebula_convert::prelude::*;
use nebula_convert::{convert_or, to_map_e};

#[derive(Debug, Clone, PartialEq)]
struct Money {
    cents: i64,
}

impl Money {
    fn to_int(&self) -> i64 {
        self.cents / 100
    }
}

fn money(value: &Value) -> Option<i64> {
    value.downcast_ref::<Money>().map(Money::to_int)
}

#[test]
fn test_sentinel_short_circuits_default_dispatch() {
    let sentinel = Value::from("the answer");
    let answer = |v: &Value| (v.as_str() == Some("the answer")).then_some(42_i64);

    assert!(to_i64_e(&sentinel, &[]).is_err());
    assert_eq!(to_i64_e(&sentinel, &[&answer]).unwrap(), 42);
}

#[test]
fn test_opaque_payload_via_downcast() {
    let v = Value::opaque(Money { cents: 1_250 });
    assert_eq!(to_i64_e(&v, &[&money]).unwrap(), 12);

    // Without a converter the payload falls back to its Debug rendering
    let err = to_i64_e(&v, &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot parse \"Money { cents: 1250 }\" as i64"
    );
}

#[test]
fn test_converters_run_in_order() {
    let none = |_: &Value| None::<String>;
    let first = |_: &Value| Some("first".to_owned());
    let second = |_: &Value| Some("second".to_owned());
    assert_eq!(
        to_string_e(&Value::Null, &[&none, &first, &second]).unwrap(),
        "first"
    );
}

#[test]
fn test_converter_result_is_not_range_checked() {
    let huge = |_: &Value| Some(u8::MAX);
    assert_eq!(to_u8_e(&Value::from(1_000), &[&huge]).unwrap(), 255);
}

#[test]
fn test_or_default_skips_converters_on_nil() {
    let always = |_: &Value| Some(1_i32);
    assert_eq!(to_i32_or(&Value::Null, 5, &[&always]), 5);
    assert_eq!(to_i32_or(&Value::from("x"), 5, &[&always]), 1);
    assert_eq!(convert_or::<i32>(&Value::from(""), 5, &[&always]), 5);
}

#[test]
fn test_collection_converter() {
    let from_csv = |v: &Value| -> Option<BTreeMap<String, bool>> {
        v.as_str()
            .filter(|s| s.contains(','))
            .map(|s| s.split(',').map(|p| (p.to_owned(), true)).collect())
    };
    let m = to_map_e::<bool>(&Value::from("a,b"), &[&from_csv]).unwrap();
    assert_eq!(m.len(), 2);
    assert!(m["a"] && m["b"]);
}
