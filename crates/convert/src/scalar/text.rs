//! String and byte targets
//!
//! The string target never fails: it is the terminal fallback the other
//! targets use for values they have no direct rule for.

use bytes::Bytes;

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::ConvertResult;

/// Render a value as text
///
/// Nil (untyped or typed) renders as the empty string; everything else uses
/// the `Display` rendering of the normalized value.
pub fn render(value: &Value) -> String {
    let value = indirect(value);
    match value {
        Value::String(s) => s.clone(),
        v if v.is_nil() => String::new(),
        v => v.to_string(),
    }
}

impl Coerce for String {
    const NAME: &'static str = "string";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        Ok(render(value))
    }
}

impl Coerce for Bytes {
    const NAME: &'static str = "bytes";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        Ok(match indirect(value) {
            Value::Bytes(b) => b.clone(),
            other => Bytes::from(render(other)),
        })
    }
}
