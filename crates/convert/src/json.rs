//! JSON helpers
//!
//! Thin wrappers over `serde_json` that follow the crate's error policy.
//! Encoding refuses input that serializes to JSON `null`, and a [`Value`]
//! holding NaN or an infinity fails as a JSON error rather than being
//! written as `null`.
//!
//! ```rust
//! use nebula_convert::{Value, json::{from_json_e, to_json_string_e}};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Port {
//!     name: String,
//!     number: u16,
//! }
//!
//! let port = Port { name: "http".into(), number: 80 };
//! let text = to_json_string_e(&port).unwrap();
//! assert_eq!(text, r#"{"name":"http","number":80}"#);
//!
//! let back: Port = from_json_e(&Value::from(text), &[]).unwrap();
//! assert_eq!(back, port);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::coerce::Converter;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};
use crate::scalar::text::render;

const NULL: &[u8] = b"null";

fn reject_null(encoded: Vec<u8>) -> ConvertResult<Vec<u8>> {
    if encoded == NULL {
        return Err(ConvertError::nil_disallowed("JSON encoding"));
    }
    Ok(encoded)
}

fn into_string(encoded: Vec<u8>) -> ConvertResult<String> {
    String::from_utf8(encoded).map_err(ConvertError::json)
}

/// Encode as compact JSON bytes
pub fn to_json_e<T: Serialize + ?Sized>(value: &T) -> ConvertResult<Vec<u8>> {
    reject_null(serde_json::to_vec(value).map_err(ConvertError::json)?)
}

/// Encode as compact JSON bytes, empty on failure
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
    to_json_e(value).unwrap_or_default()
}

/// Encode as compact JSON bytes, panicking on failure
pub fn to_json_or_panic<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
    match to_json_e(value) {
        Ok(json) => json,
        Err(e) => panic!("{e}"),
    }
}

/// Encode as a compact JSON string
pub fn to_json_string_e<T: Serialize + ?Sized>(value: &T) -> ConvertResult<String> {
    into_string(to_json_e(value)?)
}

/// Encode as a compact JSON string, panicking on failure
pub fn to_json_string_or_panic<T: Serialize + ?Sized>(value: &T) -> String {
    match to_json_string_e(value) {
        Ok(json) => json,
        Err(e) => panic!("{e}"),
    }
}

/// Encode as indented JSON bytes
pub fn to_json_indent_e<T: Serialize + ?Sized>(value: &T) -> ConvertResult<Vec<u8>> {
    reject_null(serde_json::to_vec_pretty(value).map_err(ConvertError::json)?)
}

/// Encode as indented JSON bytes, panicking on failure
pub fn to_json_indent_or_panic<T: Serialize + ?Sized>(value: &T) -> Vec<u8> {
    match to_json_indent_e(value) {
        Ok(json) => json,
        Err(e) => panic!("{e}"),
    }
}

/// Encode as an indented JSON string
pub fn to_json_indent_string_e<T: Serialize + ?Sized>(value: &T) -> ConvertResult<String> {
    into_string(to_json_indent_e(value)?)
}

/// Encode as an indented JSON string, panicking on failure
pub fn to_json_indent_string_or_panic<T: Serialize + ?Sized>(value: &T) -> String {
    match to_json_indent_string_e(value) {
        Ok(json) => json,
        Err(e) => panic!("{e}"),
    }
}

/// Decode the JSON held by `value` into `T`
///
/// Bytes are decoded directly; anything else is rendered as text first.
/// Converters run before decoding.
pub fn from_json_e<T: DeserializeOwned>(
    value: &Value,
    converters: &[Converter<'_, T>],
) -> ConvertResult<T> {
    if let Some(result) = converters.iter().find_map(|converter| converter(value)) {
        return Ok(result);
    }
    match indirect(value) {
        Value::Bytes(b) => serde_json::from_slice(b),
        other => serde_json::from_str(&render(other)),
    }
    .map_err(ConvertError::json)
}

/// Decode the JSON held by `value` into `T`, or `T::default()` on failure
pub fn from_json<T: DeserializeOwned + Default>(value: &Value, converters: &[Converter<'_, T>]) -> T {
    from_json_e(value, converters).unwrap_or_default()
}
