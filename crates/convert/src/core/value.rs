//! The dynamic `Value` enum
//!
//! `Value` is the closed sum type every coercion starts from. It covers the
//! primitive widths individually (so that narrowing can be checked against the
//! real source width), temporal values, byte payloads, the three collection
//! shapes and pointers, plus three capability variants for payloads the
//! crate does not know about: something that renders itself as text, an error,
//! and a fully opaque value that custom converters can downcast.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};

use super::kind::ValueKind;

/// Unified runtime value accepted by every conversion
#[derive(Clone, Default)]
pub enum Value {
    /// Untyped nil
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    /// Native-width signed integer
    Isize(isize),

    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    /// Native-width unsigned integer
    Usize(usize),

    F32(f32),
    F64(f64),

    /// UTF-8 text
    String(String),

    /// Binary data
    Bytes(Bytes),

    /// Instant with a fixed UTC offset
    Time(DateTime<FixedOffset>),

    /// Signed time span
    Duration(TimeDelta),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// String-keyed map
    Object(BTreeMap<String, Value>),

    /// Map with arbitrary keys, in insertion order
    Map(Vec<(Value, Value)>),

    /// Reference to another value, possibly a typed nil
    Pointer(Pointer),

    /// Payload that renders itself as text
    Display(Arc<dyn fmt::Display + Send + Sync>),

    /// Failure payload, rendered through its message
    Error(Arc<dyn std::error::Error + Send + Sync>),

    /// Anything else
    Opaque(Opaque),
}

/// A pointer-shaped value
#[derive(Clone, Debug, PartialEq)]
pub enum Pointer {
    /// Points at a value (which may itself be a pointer)
    To(Box<Value>),
    /// Nil pointer remembering the kind it would point at
    Null(ValueKind),
}

impl Pointer {
    /// Kind of the value this pointer refers to
    pub fn pointee_kind(&self) -> ValueKind {
        match self {
            Self::To(inner) => inner.kind(),
            Self::Null(kind) => *kind,
        }
    }

    /// Check if this is a nil pointer
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null(_))
    }
}

// ==================== Opaque payloads ====================

/// Object-safe view over an opaque payload
pub trait OpaqueValue: Any + fmt::Debug + Send + Sync {
    /// Upcast for downcasting by custom converters
    fn as_any(&self) -> &dyn Any;

    /// Rust type name of the payload
    fn type_name(&self) -> &'static str;
}

impl<T: Any + fmt::Debug + Send + Sync> OpaqueValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Shared handle to a value of a type unknown to this crate
#[derive(Clone)]
pub struct Opaque(Arc<dyn OpaqueValue>);

impl Opaque {
    /// Wrap any debuggable payload
    pub fn new<T: Any + fmt::Debug + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    fn inner(&self) -> &dyn OpaqueValue {
        // Deref through the Arc so the blanket impl is not picked for the Arc itself.
        &*self.0
    }

    /// Borrow the payload as `T` if it has that type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner().as_any().downcast_ref::<T>()
    }

    /// Rust type name of the payload
    pub fn type_name(&self) -> &'static str {
        self.inner().type_name()
    }

    /// Check if two handles share the same payload
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.inner(), f)
    }
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a text value
    pub fn text(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a bytes value
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    /// Create an array value
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Create a string-keyed map value
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create a map value with arbitrary keys
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Create a pointer to `v`
    pub fn pointer(v: impl Into<Value>) -> Self {
        Self::Pointer(Pointer::To(Box::new(v.into())))
    }

    /// Create a nil pointer to a value of `kind`
    pub const fn null_pointer(kind: ValueKind) -> Self {
        Self::Pointer(Pointer::Null(kind))
    }

    /// Create a value that renders itself as text
    pub fn display(v: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Display(Arc::new(v))
    }

    /// Create an error value
    pub fn error(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Error(Arc::new(e))
    }

    /// Wrap a payload of a type this crate does not know
    pub fn opaque<T: Any + fmt::Debug + Send + Sync>(v: T) -> Self {
        Self::Opaque(Opaque::new(v))
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::Isize(_) => ValueKind::Isize,
            Self::U8(_) => ValueKind::U8,
            Self::U16(_) => ValueKind::U16,
            Self::U32(_) => ValueKind::U32,
            Self::U64(_) => ValueKind::U64,
            Self::Usize(_) => ValueKind::Usize,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::String(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Time(_) => ValueKind::Time,
            Self::Duration(_) => ValueKind::Duration,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Map(_) => ValueKind::Map,
            Self::Pointer(_) => ValueKind::Pointer,
            Self::Display(_) => ValueKind::Display,
            Self::Error(_) => ValueKind::Error,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Check for untyped nil or a nil pointer
    #[inline]
    pub fn is_nil(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Pointer(p) => p.is_null(),
            _ => false,
        }
    }

    /// Check for an empty string or byte sequence
    #[inline]
    pub fn is_empty_text(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            _ => false,
        }
    }

    /// Borrow the string contents if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow an opaque payload as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(o) => o.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::I8(v) => f.debug_tuple("I8").field(v).finish(),
            Self::I16(v) => f.debug_tuple("I16").field(v).finish(),
            Self::I32(v) => f.debug_tuple("I32").field(v).finish(),
            Self::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Self::Isize(v) => f.debug_tuple("Isize").field(v).finish(),
            Self::U8(v) => f.debug_tuple("U8").field(v).finish(),
            Self::U16(v) => f.debug_tuple("U16").field(v).finish(),
            Self::U32(v) => f.debug_tuple("U32").field(v).finish(),
            Self::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Self::Usize(v) => f.debug_tuple("Usize").field(v).finish(),
            Self::F32(v) => f.debug_tuple("F32").field(v).finish(),
            Self::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            Self::Time(v) => f.debug_tuple("Time").field(v).finish(),
            Self::Duration(v) => f.debug_tuple("Duration").field(v).finish(),
            Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
            Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
            Self::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Self::Pointer(v) => f.debug_tuple("Pointer").field(v).finish(),
            Self::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
            Self::Error(v) => f.debug_tuple("Error").field(v).finish(),
            Self::Opaque(v) => f.debug_tuple("Opaque").field(v).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::Isize(a), Self::Isize(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::Usize(a), Self::Usize(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Pointer(a), Self::Pointer(b)) => a == b,
            // Capability payloads compare by identity
            (Self::Display(a), Self::Display(b)) => Arc::ptr_eq(a, b),
            (Self::Error(a), Self::Error(b)) => Arc::ptr_eq(a, b),
            (Self::Opaque(a), Self::Opaque(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// ==================== From conversions ====================

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    Bytes => Bytes,
    TimeDelta => Duration,
    Pointer => Pointer,
    Opaque => Opaque,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(v: Vec<V>) -> Self {
        Self::array(v)
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(v: BTreeMap<String, V>) -> Self {
        Self::object(v)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    /// `None` becomes the untyped nil
    fn from(v: Option<V>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Celsius(i32);

    #[test]
    fn test_kinds() {
        assert_eq!(Value::from(1_u16).kind(), ValueKind::U16);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(Value::from(vec![1, 2]).kind(), ValueKind::Array);
        assert_eq!(Value::null_pointer(ValueKind::I32).kind(), ValueKind::Pointer);
        assert_eq!(Value::display(42).kind(), ValueKind::Display);
    }

    #[test]
    fn test_nil_checks() {
        assert!(Value::Null.is_nil());
        assert!(Value::null_pointer(ValueKind::String).is_nil());
        assert!(!Value::pointer(1).is_nil());
        assert!(Value::from("").is_empty_text());
        assert!(Value::bytes(Vec::<u8>::new()).is_empty_text());
        assert!(!Value::from(0).is_empty_text());
    }

    #[test]
    fn test_typed_nil_keeps_pointee_kind() {
        let Value::Pointer(p) = Value::null_pointer(ValueKind::I64) else {
            panic!("expected pointer");
        };
        assert_eq!(p.pointee_kind(), ValueKind::I64);

        let Value::Pointer(p) = Value::pointer("s") else {
            panic!("expected pointer");
        };
        assert_eq!(p.pointee_kind(), ValueKind::String);
    }

    #[test]
    fn test_opaque_downcast() {
        let v = Value::opaque(Celsius(21));
        assert_eq!(v.downcast_ref::<Celsius>(), Some(&Celsius(21)));
        assert_eq!(v.downcast_ref::<i32>(), None);

        let Value::Opaque(o) = &v else {
            panic!("expected opaque");
        };
        assert!(o.type_name().ends_with("Celsius"));
        assert_eq!(format!("{o:?}"), "Celsius(21)");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::from(1_i8), Value::I8(1));
        assert_ne!(Value::from(1_i8), Value::I16(1));
        assert_eq!(Value::from(None::<i32>), Value::Null);

        let shared = Value::display("same");
        assert_eq!(shared.clone(), shared);
        assert_ne!(Value::display("same"), Value::display("same"));
    }
}
