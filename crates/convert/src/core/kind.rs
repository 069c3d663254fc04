//! Value kinds
//!
//! `ValueKind` is a lightweight, `Copy` classification of a [`Value`]. It is
//! what error messages name as the source of a failed conversion, and what a
//! typed nil pointer remembers about its pointee.
//!
//! ```rust
//! use nebula_convert::{Value, ValueKind};
//!
//! let v = Value::from(3_i16);
//! assert_eq!(v.kind(), ValueKind::I16);
//! assert!(ValueKind::I16.is_signed());
//! assert_eq!(ValueKind::I16.name(), "i16");
//! ```

use core::fmt::{Display, Formatter};

use super::value::Value;

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
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
    Array,
    Object,
    Map,
    Pointer,
    Display,
    Error,
    Opaque,
}

impl ValueKind {
    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        value.kind()
    }

    /// Check if this kind is a signed integer
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize
        )
    }

    /// Check if this kind is an unsigned integer
    pub const fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize
        )
    }

    /// Check if this kind is any integer
    pub const fn is_integer(&self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    /// Check if this kind is a float
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object | Self::Map)
    }

    /// Check if this kind is temporal
    pub const fn is_temporal(&self) -> bool {
        matches!(self, Self::Time | Self::Duration)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
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
            Self::Array => "array",
            Self::Object => "object",
            Self::Map => "map",
            Self::Pointer => "pointer",
            Self::Display => "display",
            Self::Error => "error",
            Self::Opaque => "opaque",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
