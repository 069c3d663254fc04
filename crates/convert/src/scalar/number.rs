//! Numeric coercion engine
//!
//! One generic engine serves all twelve numeric targets. Each target only
//! says how to take an exact match, a widened integer, and a float; the
//! dispatch order lives in [`coerce_number`].

use tracing::trace;

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};

use super::narrow::{Integer, float_to_int, narrow_wide};
use super::parse::{parse_bool_strict, parse_f64, parse_i64, parse_u64};
use super::text::render;

/// A numeric coercion target
pub trait Numeric: Coerce + Copy {
    /// The value if it already has exactly this type
    fn exact(value: &Value) -> Option<Self>;

    /// From any integer source, widened
    fn from_int(v: i128) -> ConvertResult<Self>;

    /// From a double-precision float
    fn from_f64(v: f64) -> ConvertResult<Self>;

    /// From a single-precision float
    fn from_f32(v: f32) -> ConvertResult<Self>;
}

/// Default dispatch shared by all numeric targets
///
/// After normalization: exact type, other integer widths through checked
/// narrowing, floats, booleans as `1`/`0`, then strings. Collections are
/// rejected; anything else is rendered as text and parsed.
pub fn coerce_number<T: Numeric>(value: &Value) -> ConvertResult<T> {
    let value = indirect(value);
    if let Some(v) = T::exact(value) {
        return Ok(v);
    }

    match value {
        Value::I8(v) => T::from_int(v.to_i128()),
        Value::I16(v) => T::from_int(v.to_i128()),
        Value::I32(v) => T::from_int(v.to_i128()),
        Value::I64(v) => T::from_int(v.to_i128()),
        Value::Isize(v) => T::from_int(v.to_i128()),
        Value::U8(v) => T::from_int(v.to_i128()),
        Value::U16(v) => T::from_int(v.to_i128()),
        Value::U32(v) => T::from_int(v.to_i128()),
        Value::U64(v) => T::from_int(v.to_i128()),
        Value::Usize(v) => T::from_int(v.to_i128()),
        Value::F32(v) => T::from_f32(*v),
        Value::F64(v) => T::from_f64(*v),
        Value::Bool(b) => T::from_int(i128::from(*b)),
        Value::String(s) => parse_number(s),
        Value::Bytes(b) => parse_number(&String::from_utf8_lossy(b)),
        Value::Array(_) | Value::Object(_) | Value::Map(_) => {
            Err(ConvertError::unsupported(value.kind().name(), T::NAME))
        }
        other => {
            trace!(kind = %other.kind(), target_type = T::NAME, "parsing text rendering");
            parse_number(&render(other))
        }
    }
}

/// Parse a string into `T`
///
/// Tries, in order: empty (zero), signed integer, unsigned integer, float,
/// strict boolean.
pub fn parse_number<T: Numeric>(s: &str) -> ConvertResult<T> {
    if s.is_empty() {
        return T::from_int(0);
    }
    if let Some(v) = parse_i64(s) {
        return T::from_int(i128::from(v));
    }
    if let Some(v) = parse_u64(s) {
        return T::from_int(i128::from(v));
    }
    if let Some(v) = parse_f64(s) {
        return T::from_f64(v);
    }
    if let Some(b) = parse_bool_strict(s) {
        return T::from_int(i128::from(b));
    }
    Err(ConvertError::unparseable(s, T::NAME))
}

macro_rules! impl_numeric_integer {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Coerce for $ty {
                const NAME: &'static str = <$ty as Integer>::NAME;

                fn coerce(value: &Value) -> ConvertResult<Self> {
                    coerce_number(value)
                }
            }

            impl Numeric for $ty {
                // Native widths can exceed the configured bounds; those fall
                // through to the checked path and fail there.
                #[inline]
                fn exact(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => narrow_wide(v.to_i128()).ok(),
                        _ => None,
                    }
                }

                #[inline]
                fn from_int(v: i128) -> ConvertResult<Self> {
                    narrow_wide(v)
                }

                #[inline]
                fn from_f64(v: f64) -> ConvertResult<Self> {
                    float_to_int(v)
                }

                #[inline]
                fn from_f32(v: f32) -> ConvertResult<Self> {
                    float_to_int(f64::from(v))
                }
            }
        )*
    };
}

impl_numeric_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl Coerce for f64 {
    const NAME: &'static str = "f64";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        coerce_number(value)
    }
}

impl Numeric for f64 {
    fn exact(value: &Value) -> Option<Self> {
        match value {
            Value::F64(v) => Some(*v),
            _ => None,
        }
    }

    fn from_int(v: i128) -> ConvertResult<Self> {
        Ok(v as f64)
    }

    fn from_f64(v: f64) -> ConvertResult<Self> {
        Ok(v)
    }

    fn from_f32(v: f32) -> ConvertResult<Self> {
        Ok(f64::from(v))
    }
}

impl Coerce for f32 {
    const NAME: &'static str = "f32";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        coerce_number(value)
    }
}

impl Numeric for f32 {
    fn exact(value: &Value) -> Option<Self> {
        match value {
            Value::F32(v) => Some(*v),
            _ => None,
        }
    }

    fn from_int(v: i128) -> ConvertResult<Self> {
        Ok(v as f32)
    }

    // IEEE narrowing: rounds to nearest, out-of-range becomes infinity
    fn from_f64(v: f64) -> ConvertResult<Self> {
        Ok(v as f32)
    }

    fn from_f32(v: f32) -> ConvertResult<Self> {
        Ok(v)
    }
}
