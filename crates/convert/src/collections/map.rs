//! String-keyed map targets

use std::collections::BTreeMap;

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};
use crate::scalar::text::render;

use super::slice::coerce_elements;

impl<T: Coerce> Coerce for BTreeMap<String, T> {
    const NAME: &'static str = "map";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        coerce_entries(value, T::coerce)
    }
}

/// Map whose values are lists; a scalar entry becomes a one-element list
///
/// ```rust
/// use nebula_convert::{Value, collections::map::coerce_multimap};
///
/// let v = Value::object([("a", Value::array(["x", "y"])), ("b", Value::from("z"))]);
/// let m = coerce_multimap::<String>(&v).unwrap();
/// assert_eq!(m["a"], ["x", "y"]);
/// assert_eq!(m["b"], ["z"]);
/// ```
pub fn coerce_multimap<T: Coerce>(value: &Value) -> ConvertResult<BTreeMap<String, Vec<T>>> {
    coerce_entries(value, |entry| match indirect(entry) {
        Value::Array(items) => coerce_elements(items),
        other => T::coerce(other).map(|v| vec![v]),
    })
}

/// Walk the entries of any map-shaped value, converting each value with `f`
///
/// Non-string keys are rendered as text. Text input is decoded as a JSON
/// object and nil is the empty map.
fn coerce_entries<T, F>(value: &Value, f: F) -> ConvertResult<BTreeMap<String, T>>
where
    F: Fn(&Value) -> ConvertResult<T>,
{
    let value = indirect(value);
    match value {
        Value::Object(entries) => entries
            .iter()
            .map(|(key, entry)| convert_entry(key.clone(), entry, &f))
            .collect(),
        Value::Map(entries) => entries
            .iter()
            .map(|(key, entry)| convert_entry(render(key), entry, &f))
            .collect(),
        Value::String(s) => decode_json_object(s.as_bytes())?
            .into_iter()
            .map(|(key, entry)| convert_entry(key, &entry, &f))
            .collect(),
        Value::Bytes(b) => decode_json_object(b)?
            .into_iter()
            .map(|(key, entry)| convert_entry(key, &entry, &f))
            .collect(),
        v if v.is_nil() => Ok(BTreeMap::new()),
        other => Err(ConvertError::unsupported(other.kind().name(), "map")),
    }
}

fn convert_entry<T, F>(key: String, entry: &Value, f: &F) -> ConvertResult<(String, T)>
where
    F: Fn(&Value) -> ConvertResult<T>,
{
    match f(entry) {
        Ok(v) => Ok((key, v)),
        Err(e) => Err(e.at_key(key)),
    }
}

fn decode_json_object(input: &[u8]) -> ConvertResult<BTreeMap<String, Value>> {
    serde_json::from_slice(input).map_err(ConvertError::json)
}
