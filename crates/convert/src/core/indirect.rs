//! Pointer normalization
//!
//! Every coercion starts by stripping pointer layers from its input. A nil
//! pointer is a terminal: it is returned as is so that callers can still see
//! the kind it would have pointed at.

use super::value::{Pointer, Value};

/// Follow pointers until a non-pointer value or a typed nil is reached
///
/// Total and idempotent: `indirect(indirect(v)) == indirect(v)`.
///
/// ```rust
/// use nebula_convert::{indirect, Value, ValueKind};
///
/// let v = Value::pointer(Value::pointer(5_i64));
/// assert_eq!(indirect(&v), &Value::I64(5));
///
/// let nil = Value::null_pointer(ValueKind::I32);
/// assert_eq!(indirect(&nil), &nil);
/// ```
pub fn indirect(value: &Value) -> &Value {
    let mut current = value;
    while let Value::Pointer(Pointer::To(inner)) = current {
        current = inner;
    }
    current
}
