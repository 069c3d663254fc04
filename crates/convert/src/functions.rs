//! Named conversion functions
//!
//! Every target gets four functions that differ only in how they report
//! failure:
//!
//! | suffix      | on failure                                        |
//! |-------------|---------------------------------------------------|
//! | `_e`        | returns the [`ConvertError`](crate::ConvertError) |
//! | (none)      | returns the target's zero value                   |
//! | `_or`       | returns the caller's default                      |
//! | `_or_panic` | panics with the error message                     |
//!
//! The `_or` variants also return the default, without running any
//! converter, when the input is nil or an empty string or byte sequence.
//!
//! ```rust
//! use nebula_convert::{Value, to_i8_e, to_i64, to_i64_or, to_bool_e};
//!
//! assert_eq!(to_i8_e(&Value::from(127), &[]).unwrap(), 127);
//! assert!(to_i8_e(&Value::from(128), &[]).is_err());
//! assert_eq!(to_i64(&Value::from("junk"), &[]), 0);
//! assert_eq!(to_i64_or(&Value::from(""), 7, &[]), 7);
//! assert!(to_bool_e(&Value::from("yes"), &[]).unwrap());
//! ```

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::TimeDelta;

use crate::coerce::{
    Coerce, Converter, convert, convert_e, convert_or, convert_or_panic, is_blank, run_converters,
};
use crate::collections::coerce_multimap;
use crate::core::Value;
use crate::error::ConvertResult;
use crate::temporal::Time;

macro_rules! conversion_family {
    ($($ty:ty => $e:ident, $plain:ident, $or:ident, $or_panic:ident;)*) => {
        $(
            #[doc = concat!("Convert to `", stringify!($ty), "`, returning any error")]
            pub fn $e(value: &Value, converters: &[Converter<'_, $ty>]) -> ConvertResult<$ty> {
                convert_e(value, converters)
            }

            #[doc = concat!("Convert to `", stringify!($ty), "`, or its zero value on failure")]
            pub fn $plain(value: &Value, converters: &[Converter<'_, $ty>]) -> $ty {
                convert(value, converters)
            }

            #[doc = concat!("Convert to `", stringify!($ty), "`, or `default` on nil, empty input or failure")]
            pub fn $or(value: &Value, default: $ty, converters: &[Converter<'_, $ty>]) -> $ty {
                convert_or(value, default, converters)
            }

            #[doc = concat!("Convert to `", stringify!($ty), "`, panicking on failure")]
            pub fn $or_panic(value: &Value, converters: &[Converter<'_, $ty>]) -> $ty {
                convert_or_panic(value, converters)
            }
        )*
    };
}

conversion_family! {
    bool => to_bool_e, to_bool, to_bool_or, to_bool_or_panic;
    i8 => to_i8_e, to_i8, to_i8_or, to_i8_or_panic;
    i16 => to_i16_e, to_i16, to_i16_or, to_i16_or_panic;
    i32 => to_i32_e, to_i32, to_i32_or, to_i32_or_panic;
    i64 => to_i64_e, to_i64, to_i64_or, to_i64_or_panic;
    isize => to_isize_e, to_isize, to_isize_or, to_isize_or_panic;
    u8 => to_u8_e, to_u8, to_u8_or, to_u8_or_panic;
    u16 => to_u16_e, to_u16, to_u16_or, to_u16_or_panic;
    u32 => to_u32_e, to_u32, to_u32_or, to_u32_or_panic;
    u64 => to_u64_e, to_u64, to_u64_or, to_u64_or_panic;
    usize => to_usize_e, to_usize, to_usize_or, to_usize_or_panic;
    f32 => to_f32_e, to_f32, to_f32_or, to_f32_or_panic;
    f64 => to_f64_e, to_f64, to_f64_or, to_f64_or_panic;
    String => to_string_e, to_string, to_string_or, to_string_or_panic;
    Bytes => to_bytes_e, to_bytes, to_bytes_or, to_bytes_or_panic;
    Time => to_time_e, to_time, to_time_or, to_time_or_panic;
    TimeDelta => to_duration_e, to_duration, to_duration_or, to_duration_or_panic;
}

// ==================== Sequences ====================

/// Convert to `Vec<T>`, returning any error
pub fn to_vec_e<T: Coerce>(value: &Value, converters: &[Converter<'_, Vec<T>>]) -> ConvertResult<Vec<T>> {
    convert_e(value, converters)
}

/// Convert to `Vec<T>`, or an empty vec on failure
pub fn to_vec<T: Coerce>(value: &Value, converters: &[Converter<'_, Vec<T>>]) -> Vec<T> {
    convert(value, converters)
}

/// Convert to `Vec<T>`, or `default` on nil, empty input or failure
pub fn to_vec_or<T: Coerce>(
    value: &Value,
    default: Vec<T>,
    converters: &[Converter<'_, Vec<T>>],
) -> Vec<T> {
    convert_or(value, default, converters)
}

/// Convert to `Vec<T>`, panicking on failure
pub fn to_vec_or_panic<T: Coerce>(value: &Value, converters: &[Converter<'_, Vec<T>>]) -> Vec<T> {
    convert_or_panic(value, converters)
}

// ==================== Maps ====================

/// Convert to `BTreeMap<String, T>`, returning any error
pub fn to_map_e<T: Coerce>(
    value: &Value,
    converters: &[Converter<'_, BTreeMap<String, T>>],
) -> ConvertResult<BTreeMap<String, T>> {
    convert_e(value, converters)
}

/// Convert to `BTreeMap<String, T>`, or an empty map on failure
pub fn to_map<T: Coerce>(
    value: &Value,
    converters: &[Converter<'_, BTreeMap<String, T>>],
) -> BTreeMap<String, T> {
    convert(value, converters)
}

/// Convert to `BTreeMap<String, T>`, or `default` on nil, empty input or failure
pub fn to_map_or<T: Coerce>(
    value: &Value,
    default: BTreeMap<String, T>,
    converters: &[Converter<'_, BTreeMap<String, T>>],
) -> BTreeMap<String, T> {
    convert_or(value, default, converters)
}

/// Convert to `BTreeMap<String, T>`, panicking on failure
pub fn to_map_or_panic<T: Coerce>(
    value: &Value,
    converters: &[Converter<'_, BTreeMap<String, T>>],
) -> BTreeMap<String, T> {
    convert_or_panic(value, converters)
}

// ==================== Multimaps ====================

/// Convert to `BTreeMap<String, Vec<T>>`, returning any error
///
/// Converters see the whole input and win; otherwise a scalar entry
/// becomes a one-element list.
pub fn to_multimap_e<T: Coerce>(
    value: &Value,
    converters: &[Converter<'_, BTreeMap<String, Vec<T>>>],
) -> ConvertResult<BTreeMap<String, Vec<T>>> {
    match run_converters(value, converters, "multimap") {
        Some(result) => Ok(result),
        None => coerce_multimap(value),
    }
}

/// Convert to `BTreeMap<String, Vec<T>>`, or an empty map on failure
pub fn to_multimap<T: Coerce>(
    value: &Value,
    converters: &[Converter<'_, BTreeMap<String, Vec<T>>>],
) -> BTreeMap<String, Vec<T>> {
    to_multimap_e(value, converters).unwrap_or_default()
}

/// Convert to `BTreeMap<String, Vec<T>>`, or `default` on nil, empty input or failure
pub fn to_multimap_or<T: Coerce>(
    value: &Value,
    default: BTreeMap<String, Vec<T>>,
    converters: &[Converter<'_, BTreeMap<String, Vec<T>>>],
) -> BTreeMap<String, Vec<T>> {
    if is_blank(value) {
        return default;
    }
    to_multimap_e(value, converters).unwrap_or(default)
}

/// Convert to `BTreeMap<String, Vec<T>>`, panicking on failure
pub fn to_multimap_or_panic<T: Coerce>(
    value: &Value,
    converters: &[Converter<'_, BTreeMap<String, Vec<T>>>],
) -> BTreeMap<String, Vec<T>> {
    match to_multimap_e(value, converters) {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}
