//! Runtime-selected targets
//!
//! When the destination type is only known at runtime (a schema field, a
//! column type), describe it with a [`Target`] and call [`convert_to`]. The
//! result is a [`Value`] of the matching variant.
//!
//! ```rust
//! use nebula_convert::{Target, Value, convert_to};
//!
//! let target = Target::slice(Target::U8);
//! let v = convert_to(&Value::from("[1, 2]"), &target, &[]).unwrap();
//! assert_eq!(v, Value::array([1_u8, 2]));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use chrono::TimeDelta;
use tracing::trace;

use crate::coerce::{Coerce, Converter};
use crate::core::{Value, ValueKind, indirect};
use crate::error::{ConvertError, ConvertResult};
use crate::json::to_json_e;
use crate::scalar::text::render;
use crate::temporal::Time;

/// A conversion destination
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    Bytes,
    Time,
    Duration,
    /// JSON-encoded bytes
    Json,
    /// Sequence of the inner target
    Slice(Box<Target>),
    /// String-keyed map of the inner target
    Map(Box<Target>),
    /// Pointer to the inner target; nil stays a typed nil
    Pointer(Box<Target>),
}

impl Target {
    /// Sequence of `inner`
    pub fn slice(inner: Target) -> Self {
        Self::Slice(Box::new(inner))
    }

    /// String-keyed map of `inner`
    pub fn map(inner: Target) -> Self {
        Self::Map(Box::new(inner))
    }

    /// Pointer to `inner`
    pub fn pointer(inner: Target) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Base name of the target
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::Json => "json",
            Self::Slice(_) => "slice",
            Self::Map(_) => "map",
            Self::Pointer(_) => "pointer",
        }
    }

    /// Kind of the value [`convert_to`] produces for this target
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool => ValueKind::Bool,
            Self::I8 => ValueKind::I8,
            Self::I16 => ValueKind::I16,
            Self::I32 => ValueKind::I32,
            Self::I64 => ValueKind::I64,
            Self::Isize => ValueKind::Isize,
            Self::U8 => ValueKind::U8,
            Self::U16 => ValueKind::U16,
            Self::U32 => ValueKind::U32,
            Self::U64 => ValueKind::U64,
            Self::Usize => ValueKind::Usize,
            Self::F32 => ValueKind::F32,
            Self::F64 => ValueKind::F64,
            Self::String => ValueKind::String,
            Self::Bytes | Self::Json => ValueKind::Bytes,
            Self::Time => ValueKind::Time,
            Self::Duration => ValueKind::Duration,
            Self::Slice(_) => ValueKind::Array,
            Self::Map(_) => ValueKind::Object,
            Self::Pointer(_) => ValueKind::Pointer,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slice(inner) | Self::Map(inner) | Self::Pointer(inner) => {
                write!(f, "{}<{inner}>", self.name())
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Convert `value` into the variant described by `target`
///
/// Converters see the raw input and may return any value; the first `Some`
/// is returned as is.
pub fn convert_to(
    value: &Value,
    target: &Target,
    converters: &[Converter<'_, Value>],
) -> ConvertResult<Value> {
    if let Some(result) = converters.iter().find_map(|converter| converter(value)) {
        trace!(target_type = %target, "custom converter matched");
        return Ok(result);
    }
    dispatch(value, target)
}

/// Decode the text of `value` as JSON, then convert it to `target`
pub fn convert_json_to(
    value: &Value,
    target: &Target,
    converters: &[Converter<'_, Value>],
) -> ConvertResult<Value> {
    if let Some(result) = converters.iter().find_map(|converter| converter(value)) {
        return Ok(result);
    }
    let decoded: Value = match indirect(value) {
        Value::Bytes(b) => serde_json::from_slice::<Value>(b),
        other => serde_json::from_str::<Value>(&render(other)),
    }
    .map_err(ConvertError::json)?;
    dispatch(&decoded, target)
}

fn dispatch(value: &Value, target: &Target) -> ConvertResult<Value> {
    match target {
        Target::Bool => bool::coerce(value).map(Value::Bool),
        Target::I8 => i8::coerce(value).map(Value::I8),
        Target::I16 => i16::coerce(value).map(Value::I16),
        Target::I32 => i32::coerce(value).map(Value::I32),
        Target::I64 => i64::coerce(value).map(Value::I64),
        Target::Isize => isize::coerce(value).map(Value::Isize),
        Target::U8 => u8::coerce(value).map(Value::U8),
        Target::U16 => u16::coerce(value).map(Value::U16),
        Target::U32 => u32::coerce(value).map(Value::U32),
        Target::U64 => u64::coerce(value).map(Value::U64),
        Target::Usize => usize::coerce(value).map(Value::Usize),
        Target::F32 => f32::coerce(value).map(Value::F32),
        Target::F64 => f64::coerce(value).map(Value::F64),
        Target::String => String::coerce(value).map(Value::String),
        Target::Bytes => Bytes::coerce(value).map(Value::Bytes),
        Target::Time => Time::coerce(value).map(Value::Time),
        Target::Duration => TimeDelta::coerce(value).map(Value::Duration),
        Target::Json => to_json_e(indirect(value)).map(|json| Value::Bytes(json.into())),
        Target::Slice(inner) => {
            let items = Vec::<Value>::coerce(value)?;
            items
                .iter()
                .enumerate()
                .map(|(index, item)| dispatch(item, inner).map_err(|e| e.at_index(index)))
                .collect::<ConvertResult<Vec<_>>>()
                .map(Value::Array)
        }
        Target::Map(inner) => {
            let entries = BTreeMap::<String, Value>::coerce(value)?;
            entries
                .into_iter()
                .map(|(key, entry)| match dispatch(&entry, inner) {
                    Ok(v) => Ok((key, v)),
                    Err(e) => Err(e.at_key(key)),
                })
                .collect::<ConvertResult<BTreeMap<_, _>>>()
                .map(Value::Object)
        }
        Target::Pointer(inner) => {
            if indirect(value).is_nil() {
                return Ok(Value::null_pointer(inner.kind()));
            }
            dispatch(value, inner).map(Value::pointer)
        }
    }
}

/// Infer the most specific target `value` converts to cleanly
///
/// Integers widen to `I64`/`U64` and integral floats report `I64`. Text is
/// tried as a time, a duration, a boolean (only if it contains a letter),
/// an integer, an unsigned integer and a float before settling on
/// `String`. Nil has no target.
pub fn detect_target(value: &Value) -> Option<Target> {
    let value = indirect(value);
    match value {
        v if v.is_nil() => return None,
        Value::I8(_) | Value::I16(_) | Value::I32(_) | Value::I64(_) | Value::Isize(_) => {
            return Some(Target::I64);
        }
        Value::U8(_) | Value::U16(_) | Value::U32(_) | Value::U64(_) | Value::Usize(_) => {
            return Some(Target::U64);
        }
        Value::F32(_) => return Some(Target::F32),
        Value::F64(f) => {
            let integral = f.fract() == 0.0 && i64::coerce(value).is_ok();
            return Some(if integral { Target::I64 } else { Target::F64 });
        }
        Value::Bool(_) => return Some(Target::Bool),
        Value::Time(_) => return Some(Target::Time),
        Value::Duration(_) => return Some(Target::Duration),
        Value::String(s) if s.is_empty() => return Some(Target::String),
        Value::Array(_) | Value::Object(_) | Value::Map(_) => return Some(Target::String),
        _ => {}
    }

    if Time::coerce(value).is_ok() {
        return Some(Target::Time);
    }
    if TimeDelta::coerce(value).is_ok() {
        return Some(Target::Duration);
    }
    if render(value).chars().any(char::is_alphabetic) && bool::coerce(value).is_ok() {
        return Some(Target::Bool);
    }
    if let Ok(int) = i64::coerce(value) {
        return Some(match f64::coerce(value) {
            Ok(float) if float != int as f64 => Target::F64,
            _ => Target::I64,
        });
    }
    if u64::coerce(value).is_ok() {
        return Some(Target::U64);
    }
    if f64::coerce(value).is_ok() {
        return Some(Target::F64);
    }
    Some(Target::String)
}
