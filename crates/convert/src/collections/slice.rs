//! Sequence target

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};

impl<T: Coerce> Coerce for Vec<T> {
    const NAME: &'static str = "slice";

    /// Arrays convert element-wise, text is decoded as a JSON array first
    /// and nil is the empty sequence.
    fn coerce(value: &Value) -> ConvertResult<Self> {
        let value = indirect(value);
        match value {
            Value::Array(items) => coerce_elements(items),
            Value::String(s) => coerce_elements(&decode_json_array(s.as_bytes())?),
            Value::Bytes(b) => coerce_elements(&decode_json_array(b)?),
            v if v.is_nil() => Ok(Vec::new()),
            other => Err(ConvertError::unsupported(other.kind().name(), Self::NAME)),
        }
    }
}

/// Coerce every element, stopping at the first failure
///
/// The error carries the index of the failing element.
pub fn coerce_elements<T: Coerce>(items: &[Value]) -> ConvertResult<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| T::coerce(item).map_err(|e| e.at_index(index)))
        .collect()
}

fn decode_json_array(input: &[u8]) -> ConvertResult<Vec<Value>> {
    serde_json::from_slice(input).map_err(ConvertError::json)
}
