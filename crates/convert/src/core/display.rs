//! Display implementation for Value
//!
//! This is the canonical text rendering used by the string target and by the
//! stringify fallback of every other target. Primitives render losslessly;
//! collections get a structural print that is not meant to be parsed back.

use std::fmt;

use chrono::SecondsFormat;

use crate::core::value::{Pointer, Value};
use crate::temporal::duration::format_duration;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),

            Value::Bool(b) => write!(f, "{b}"),

            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Isize(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::Usize(v) => write!(f, "{v}"),

            Value::F32(v) => f.write_str(&format_f32(*v)),
            Value::F64(v) => f.write_str(&format_f64(*v)),

            Value::String(s) => f.write_str(s),

            Value::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),

            Value::Time(t) => f.write_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),

            Value::Duration(d) => f.write_str(&format_duration(*d)),

            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }

            Value::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }

            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }

            Value::Pointer(Pointer::To(inner)) => write!(f, "{inner}"),
            Value::Pointer(Pointer::Null(_)) => f.write_str("null"),

            Value::Display(d) => write!(f, "{d}"),

            Value::Error(e) => write!(f, "{e}"),

            Value::Opaque(o) => write!(f, "{o:?}"),
        }
    }
}

/// Shortest decimal that round-trips, never in exponent form
pub fn format_f64(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v == f64::INFINITY {
        "+Inf".to_owned()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_owned()
    } else {
        format!("{v}")
    }
}

/// Like [`format_f64`] but at single precision
pub fn format_f32(v: f32) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v == f32::INFINITY {
        "+Inf".to_owned()
    } else if v == f32::NEG_INFINITY {
        "-Inf".to_owned()
    } else {
        format!("{v}")
    }
}
