//! Integration test: the scalar coercion matrix
//!
//! Source shape x target type, through the public named functions

use chrono::TimeDelta;
use insta::assert_snapshot;
use nebula_convert::prelude::*;
use nebula_convert::{Time, to_time_with_layout_e};
use rstest::rstest;

// ==================== Overflow rejection ====================

#[test]
fn test_i8_boundaries() {
    assert_eq!(to_i8_e(&Value::from(127), &[]).unwrap(), 127);
    assert_eq!(to_i8_e(&Value::from(-128), &[]).unwrap(), -128);
    assert!(to_i8_e(&Value::from(128), &[]).unwrap_err().is_overflow());
    assert!(to_i8_e(&Value::from(300), &[]).unwrap_err().is_overflow());
}

#[test]
fn test_negative_to_unsigned() {
    assert!(to_u8_e(&Value::from(-1), &[]).unwrap_err().is_overflow());
    assert!(to_u64_e(&Value::from(-1_i8), &[]).unwrap_err().is_overflow());
    assert!(to_usize_e(&Value::from("-1"), &[]).unwrap_err().is_overflow());
}

#[test]
fn test_unsigned_to_signed() {
    assert!(to_i64_e(&Value::from(u64::MAX), &[]).unwrap_err().is_overflow());
    assert_eq!(to_i64_e(&Value::from(i64::MAX as u64), &[]).unwrap(), i64::MAX);
    assert_eq!(to_i16_e(&Value::from(255_u8), &[]).unwrap(), 255);
}

#[test]
fn test_float_to_int_is_bounds_checked() {
    assert_eq!(to_i32_e(&Value::from(-7.99), &[]).unwrap(), -7);
    assert!(to_u8_e(&Value::from(256.0), &[]).unwrap_err().is_overflow());
    assert!(to_i64_e(&Value::from(f64::NAN), &[]).unwrap_err().is_overflow());
}

#[test]
fn test_error_messages() {
    assert_snapshot!(to_i8_e(&Value::from(300), &[]).unwrap_err(), @"value 300 overflows i8");
    assert_snapshot!(to_u32_e(&Value::from("abc"), &[]).unwrap_err(), @r#"cannot parse "abc" as u32"#);
    assert_snapshot!(to_f64_e(&Value::object([("a", 1)]), &[]).unwrap_err(), @"cannot convert object to f64");
    assert_snapshot!(to_duration_e(&Value::from("5"), &[]).unwrap_err(), @r#"invalid duration "5": missing unit"#);
}

// ==================== Strings ====================

#[rstest]
#[case("", 0)]
#[case("42", 42)]
#[case("-42", -42)]
#[case("0x2A", 42)]
#[case("0b101010", 42)]
#[case("0o52", 42)]
#[case("4_2", 42)]
#[case("42.9", 42)]
#[case("true", 1)]
#[case("False", 0)]
fn test_string_to_i64(#[case] input: &str, #[case] expected: i64) {
    assert_eq!(to_i64_e(&Value::from(input), &[]).unwrap(), expected);
}

#[rstest]
#[case("maybe")]
#[case("yes")]
#[case("12abc")]
#[case(" 12")]
fn test_unparseable_strings(#[case] input: &str) {
    assert!(to_i64_e(&Value::from(input), &[]).unwrap_err().is_unparseable());
}

#[test]
fn test_empty_string_is_zero_not_error() {
    assert_eq!(to_i64_e(&Value::from(""), &[]).unwrap(), 0);
    assert_eq!(to_f32_e(&Value::from(""), &[]).unwrap(), 0.0);
    assert!(!to_bool_e(&Value::from(""), &[]).unwrap());
}

// ==================== Booleans ====================

#[rstest]
#[case("yes", true)]
#[case("Y", true)]
#[case("on", true)]
#[case("OK", true)]
#[case("1", true)]
#[case("off", false)]
#[case("n", false)]
#[case("FALSE", false)]
#[case("0", false)]
fn test_bool_truth_table(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(to_bool_e(&Value::from(input), &[]).unwrap(), expected);
}

#[test]
fn test_bool_rejects_unknown_words() {
    assert!(to_bool_e(&Value::from("maybe"), &[]).unwrap_err().is_unparseable());
}

// ==================== String target ====================

#[rstest]
#[case(Value::from(i64::MIN), "-9223372036854775808")]
#[case(Value::from(i64::MAX), "9223372036854775807")]
#[case(Value::from(u64::MAX), "18446744073709551615")]
#[case(Value::from(0.1_f64 + 0.2_f64), "0.30000000000000004")]
#[case(Value::from(1e-7_f64), "0.0000001")]
#[case(Value::from(false), "false")]
#[case(Value::from(TimeDelta::milliseconds(1500)), "1.5s")]
fn test_to_string(#[case] input: Value, #[case] expected: &str) {
    assert_eq!(to_string_e(&input, &[]).unwrap(), expected);
}

#[test]
fn test_float_text_round_trips() {
    for f in [0.1, 1.0 / 3.0, f64::MAX, f64::MIN_POSITIVE, -2.5e-300] {
        let text = to_string_e(&Value::from(f), &[]).unwrap();
        assert_eq!(to_f64_e(&Value::from(text), &[]).unwrap(), f);
    }
}

// ==================== Temporal ====================

#[test]
fn test_time_layouts() {
    let expected: Time = "2022-07-02T11:45:02Z".parse().unwrap();
    assert_eq!(to_time_e(&Value::from("2022-07-02 11:45:02"), &[]).unwrap(), expected);
    assert_eq!(to_time_e(&Value::from("2022-07-02T11:45:02Z"), &[]).unwrap(), expected);

    let text = to_string_e(&Value::from(expected), &[]).unwrap();
    assert_eq!(to_time_e(&Value::from(text), &[]).unwrap(), expected);

    let custom = to_time_with_layout_e(&Value::from("02/07/2022"), "%d/%m/%Y").unwrap();
    assert_eq!(custom, "2022-07-02T00:00:00Z".parse::<Time>().unwrap());
}

#[test]
fn test_durations() {
    assert_eq!(
        to_duration_e(&Value::from("1h30m"), &[]).unwrap(),
        TimeDelta::minutes(90)
    );
    assert_eq!(
        to_duration_or(&Value::from("later"), TimeDelta::seconds(1), &[]),
        TimeDelta::seconds(1)
    );
}

// ==================== Normalization ====================

#[test]
fn test_pointer_chase() {
    let v = Value::pointer(Value::pointer(5_i64));
    assert_eq!(indirect(&v), &Value::I64(5));
    assert_eq!(to_u8_e(&v, &[]).unwrap(), 5);
}

#[test]
fn test_typed_nil() {
    let nil = Value::pointer(Value::null_pointer(ValueKind::I32));
    assert_eq!(to_i32_e(&nil, &[]).unwrap(), 0);
    assert_eq!(to_string_e(&nil, &[]).unwrap(), "");
    assert_eq!(to_i32_or(&nil, 11, &[]), 11);
}

// ==================== Error policies ====================

#[test]
fn test_or_default_is_total() {
    let inputs = [
        Value::Null,
        Value::from(""),
        Value::from("bad"),
        Value::from(1e300),
        Value::array([1]),
        Value::from("12"),
    ];
    let results: Vec<i64> = inputs.iter().map(|v| to_i64_or(v, 7, &[])).collect();
    assert_eq!(results, [7, 7, 7, 7, 7, 12]);
}

#[test]
#[should_panic(expected = "value -1 overflows u32")]
fn test_or_panic_is_explicit() {
    to_u32_or_panic(&Value::from(-1), &[]);
}
