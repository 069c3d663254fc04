//! Serde support for Value
//!
//! Values serialize to the JSON shape a caller would expect: bytes as
//! base64 strings, times as RFC 3339, durations as integer nanoseconds and
//! maps with arbitrary keys as objects keyed by the key's text. Capability
//! payloads serialize through their text rendering. NaN and infinities are
//! rejected.
//!
//! Deserialization goes through `serde_json::Value`, so it produces only the
//! JSON-shaped subset of variants.

use base64::Engine;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::display::{format_f32, format_f64};
use crate::core::value::{Pointer, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null | Value::Pointer(Pointer::Null(_)) => serializer.serialize_none(),

            Value::Bool(b) => serializer.serialize_bool(*b),

            Value::I8(v) => serializer.serialize_i8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::Isize(v) => serializer.serialize_i64(*v as i64),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::Usize(v) => serializer.serialize_u64(*v as u64),

            // JSON has no spelling for these; serde_json would write `null`.
            Value::F32(v) if !v.is_finite() => Err(unsupported_float(&format_f32(*v))),
            Value::F64(v) if !v.is_finite() => Err(unsupported_float(&format_f64(*v))),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),

            Value::String(s) => serializer.serialize_str(s),

            Value::Bytes(b) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                serializer.serialize_str(&encoded)
            }

            Value::Time(_) | Value::Display(_) | Value::Error(_) | Value::Opaque(_) => {
                serializer.collect_str(self)
            }

            Value::Duration(d) => match d.num_nanoseconds() {
                Some(nanos) => serializer.serialize_i64(nanos),
                None => Err(serde::ser::Error::custom(format!(
                    "duration {d} overflows i64 nanoseconds"
                ))),
            },

            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }

            Value::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }

            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(&key.to_string(), value)?;
                }
                map.end()
            }

            Value::Pointer(Pointer::To(inner)) => inner.serialize(serializer),
        }
    }
}

fn unsupported_float<E: serde::ser::Error>(rendered: &str) -> E {
    E::custom(format!("unsupported value: {rendered}"))
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::U64(u)
                } else {
                    Value::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
