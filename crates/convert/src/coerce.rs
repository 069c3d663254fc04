//! The coercion trait and the custom-converter escape hatch
//!
//! [`Coerce`] is implemented by every target type. The free functions in this
//! module wrap it with the caller-supplied [`Converter`] list and the four
//! error policies: propagate ([`convert_e`]), swallow ([`convert`]),
//! substitute ([`convert_or`]) and panic ([`convert_or_panic`]).
//!
//! ```rust
//! use nebula_convert::{convert_e, Converter, Value};
//!
//! let sentinel = Value::from("forty-two");
//! let answer = |v: &Value| (v.as_str() == Some("forty-two")).then_some(42_i64);
//! let converters: [Converter<'_, i64>; 1] = [&answer];
//!
//! assert_eq!(convert_e::<i64>(&sentinel, &converters).unwrap(), 42);
//! assert!(convert_e::<i64>(&sentinel, &[]).is_err());
//! ```

use tracing::trace;

use crate::core::{Value, indirect};
use crate::error::ConvertResult;

/// A target type values can be coerced into
pub trait Coerce: Sized {
    /// Rust-facing name of the target, used in error messages
    const NAME: &'static str;

    /// Run the default dispatch for this target
    ///
    /// Implementations normalize the input with [`indirect`] themselves.
    fn coerce(value: &Value) -> ConvertResult<Self>;
}

/// Caller-supplied override consulted before default dispatch
///
/// Receives the value as passed in, before pointer normalization. Returning
/// `Some` ends the conversion with that result.
pub type Converter<'a, T> = &'a dyn Fn(&Value) -> Option<T>;

/// Convert `value` into `T`, returning any error
pub fn convert_e<T: Coerce>(value: &Value, converters: &[Converter<'_, T>]) -> ConvertResult<T> {
    match run_converters(value, converters, T::NAME) {
        Some(result) => Ok(result),
        None => T::coerce(value),
    }
}

/// First `Some` produced by `converters`, in order
pub(crate) fn run_converters<T>(
    value: &Value,
    converters: &[Converter<'_, T>],
    target_type: &'static str,
) -> Option<T> {
    converters.iter().enumerate().find_map(|(index, converter)| {
        let result = converter(value);
        if result.is_some() {
            trace!(target_type, index, "custom converter matched");
        }
        result
    })
}

/// Nil (untyped or typed) or empty text after normalization
pub(crate) fn is_blank(value: &Value) -> bool {
    let normalized = indirect(value);
    normalized.is_nil() || normalized.is_empty_text()
}

/// Convert `value` into `T`, falling back to `T::default()` on error
pub fn convert<T: Coerce + Default>(value: &Value, converters: &[Converter<'_, T>]) -> T {
    convert_e(value, converters).unwrap_or_default()
}

/// Convert `value` into `T`, falling back to `default`
///
/// `default` is returned without consulting any converter when the
/// normalized input is nil (untyped or typed) or an empty string or byte
/// sequence, and otherwise whenever the conversion fails.
pub fn convert_or<T: Coerce>(value: &Value, default: T, converters: &[Converter<'_, T>]) -> T {
    if is_blank(value) {
        return default;
    }
    convert_e(value, converters).unwrap_or(default)
}

/// Convert `value` into `T`, panicking with the error message on failure
pub fn convert_or_panic<T: Coerce>(value: &Value, converters: &[Converter<'_, T>]) -> T {
    match convert_e(value, converters) {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

// ==================== Identity and optional targets ====================

impl Coerce for Value {
    const NAME: &'static str = "value";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        Ok(indirect(value).clone())
    }
}

/// Pointer-to-`T`: nil becomes `None`
impl<T: Coerce> Coerce for Option<T> {
    const NAME: &'static str = T::NAME;

    fn coerce(value: &Value) -> ConvertResult<Self> {
        if indirect(value).is_nil() {
            return Ok(None);
        }
        T::coerce(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueKind;

    #[test]
    fn test_first_matching_converter_wins() {
        let never = |_: &Value| None::<i32>;
        let one = |_: &Value| Some(1);
        let two = |_: &Value| Some(2);
        let converters: [Converter<'_, i32>; 3] = [&never, &one, &two];
        assert_eq!(convert_e(&Value::from("x"), &converters).unwrap(), 1);
    }

    #[test]
    fn test_converter_sees_raw_value() {
        let is_pointer = |v: &Value| matches!(v, Value::Pointer(_)).then_some(true);
        let converters: [Converter<'_, bool>; 1] = [&is_pointer];
        assert!(convert_e(&Value::pointer(0), &converters).unwrap());
        assert!(!convert_e(&Value::from(0), &converters).unwrap());
    }

    #[test]
    fn test_or_returns_default_on_empty_input() {
        let converted = |_: &Value| Some(99_i64);
        let converters: [Converter<'_, i64>; 1] = [&converted];
        assert_eq!(convert_or(&Value::Null, 7, &converters), 7);
        assert_eq!(convert_or(&Value::from(""), 7, &converters), 7);
        assert_eq!(
            convert_or(&Value::null_pointer(ValueKind::I64), 7, &converters),
            7
        );
        assert_eq!(convert_or(&Value::from("1"), 7, &converters), 99);
    }

    #[test]
    fn test_or_returns_default_on_error() {
        assert_eq!(convert_or::<i64>(&Value::from("bad"), 7, &[]), 7);
        assert_eq!(convert_or::<i64>(&Value::from("5"), 7, &[]), 5);
    }

    #[test]
    fn test_plain_swallows_error() {
        assert_eq!(convert::<u8>(&Value::from(-1), &[]), 0);
    }

    #[test]
    #[should_panic(expected = "value 300 overflows i8")]
    fn test_or_panic() {
        convert_or_panic::<i8>(&Value::from(300), &[]);
    }

    #[test]
    fn test_option_target() {
        assert_eq!(convert_e::<Option<i32>>(&Value::Null, &[]).unwrap(), None);
        assert_eq!(
            convert_e::<Option<i32>>(&Value::null_pointer(ValueKind::I32), &[]).unwrap(),
            None
        );
        assert_eq!(
            convert_e::<Option<i32>>(&Value::pointer("12"), &[]).unwrap(),
            Some(12)
        );
    }

    #[test]
    fn test_value_target_normalizes() {
        let v = Value::pointer(Value::pointer(true));
        assert_eq!(convert_e::<Value>(&v, &[]).unwrap(), Value::Bool(true));
    }
}
