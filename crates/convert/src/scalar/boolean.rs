//! Boolean target

use tracing::trace;

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};

use super::parse::parse_bool_loose;
use super::text::render;

impl Coerce for bool {
    const NAME: &'static str = "bool";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        let value = indirect(value);
        match value {
            Value::Bool(b) => Ok(*b),
            v if v.is_nil() => Ok(false),
            Value::I8(v) => Ok(*v != 0),
            Value::I16(v) => Ok(*v != 0),
            Value::I32(v) => Ok(*v != 0),
            Value::I64(v) => Ok(*v != 0),
            Value::Isize(v) => Ok(*v != 0),
            Value::U8(v) => Ok(*v != 0),
            Value::U16(v) => Ok(*v != 0),
            Value::U32(v) => Ok(*v != 0),
            Value::U64(v) => Ok(*v != 0),
            Value::Usize(v) => Ok(*v != 0),
            Value::F32(v) => Ok(*v != 0.0),
            Value::F64(v) => Ok(*v != 0.0),
            Value::String(s) => parse_bool(s),
            Value::Bytes(b) => parse_bool(&String::from_utf8_lossy(b)),
            Value::Array(_) | Value::Object(_) | Value::Map(_) => {
                Err(ConvertError::unsupported(value.kind().name(), Self::NAME))
            }
            other => {
                trace!(kind = %other.kind(), "parsing text rendering as bool");
                parse_bool(&render(other))
            }
        }
    }
}

fn parse_bool(s: &str) -> ConvertResult<bool> {
    parse_bool_loose(s).ok_or_else(|| ConvertError::unparseable(s, bool::NAME))
}
