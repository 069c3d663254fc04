//! # nebula-convert
//!
//! Coerce loosely-typed runtime values into concrete Rust types.
//!
//! Input arrives as a [`Value`] (parsed JSON, CLI arguments, config entries,
//! anything produced without a static schema). Every target type implements
//! [`Coerce`], and the named functions (`to_i8_e`, `to_bool`, `to_string_or`,
//! ...) wrap it with a choice of error policy.
//!
//! ## Guarantees
//!
//! - Integer conversions never wrap: `300` does not become an `i8` of `44`,
//!   it fails with [`ConvertError::Overflow`].
//! - Float to integer truncates toward zero and fails on NaN, infinity and
//!   out-of-range values.
//! - Pointers are followed before dispatch; a nil pointer keeps the kind of
//!   its pointee.
//! - Caller-supplied [`Converter`]s run first and short-circuit the default
//!   dispatch.
//!
//! ## Quick start
//!
//! ```rust
//! use nebula_convert::prelude::*;
//!
//! let port = Value::from("8080");
//! assert_eq!(to_u16_e(&port, &[]).unwrap(), 8080);
//!
//! let too_big = Value::from(300);
//! assert!(to_i8_e(&too_big, &[]).unwrap_err().is_overflow());
//!
//! assert_eq!(to_i64_or(&Value::Null, 7, &[]), 7);
//! assert!(to_bool_e(&Value::from("on"), &[]).unwrap());
//!
//! let ports: Vec<u16> = to_vec_e(&Value::from("[80, 443]"), &[]).unwrap();
//! assert_eq!(ports, [80, 443]);
//! ```
//!
//! ## Feature flags
//!
//! - `native-int-32`: check `isize`/`usize` against 32-bit bounds on every
//!   platform.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod coerce;
pub mod collections;
pub mod core;
pub mod error;
pub mod functions;
pub mod json;
pub mod pointer;
pub mod scalar;
pub mod target;
pub mod temporal;

pub use crate::coerce::{Coerce, Converter, convert, convert_e, convert_or, convert_or_panic};
pub use crate::core::{Opaque, OpaqueValue, Pointer, Value, ValueKind, indirect};
pub use crate::error::{ConvertError, ConvertResult};
pub use crate::functions::*;
pub use crate::json::{
    from_json, from_json_e, to_json, to_json_e, to_json_indent_e, to_json_indent_or_panic,
    to_json_indent_string_e, to_json_indent_string_or_panic, to_json_or_panic,
    to_json_string_e, to_json_string_or_panic,
};
pub use crate::pointer::{from_ptr, from_ptr_or, to_ptr};
pub use crate::scalar::NATIVE_INT_BITS;
pub use crate::target::{Target, convert_json_to, convert_to, detect_target};
pub use crate::temporal::{Time, to_time_with_layout_e};

/// Prelude for common imports
pub mod prelude {
    pub use crate::functions::*;
    pub use crate::{
        Coerce, ConvertError, ConvertResult, Converter, Target, Value, ValueKind, convert_e,
        convert_to, indirect,
    };
}
