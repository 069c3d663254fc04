//! Conversion error types
//!
//! Every `..._e` function in this crate returns [`ConvertError`]. The variants
//! double as the failure taxonomy: unparseable strings, overflow, unsupported
//! source kinds and rejected nils, plus the temporal/JSON parse failures and
//! the element/entry context used by the composite coercions.

use thiserror::Error;

/// Result type alias for conversions
pub type ConvertResult<T> = Result<T, ConvertError>;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Conversion errors
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A string could not be read as any of int, uint, float or bool
    #[error("cannot parse \"{input}\" as {target}")]
    UnparseableString { input: String, target: &'static str },

    /// The value does not fit the target's range
    #[error("value {value} overflows {target}")]
    Overflow { value: String, target: &'static str },

    /// No coercion path exists from this kind of value
    #[error("cannot convert {kind} to {target}")]
    UnsupportedType {
        kind: &'static str,
        target: &'static str,
    },

    /// The operation refuses nil input
    #[error("nil is not allowed for {operation}")]
    NilDisallowed { operation: &'static str },

    /// No supported layout matched the input
    #[error("invalid time \"{input}\": {source}")]
    InvalidTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The input is not a duration literal
    #[error("invalid duration \"{input}\": {reason}")]
    InvalidDuration { input: String, reason: &'static str },

    /// JSON encoding or decoding failed
    #[error("JSON error: {message}")]
    Json { message: String },

    /// An element of a sequence failed to convert
    #[error("element at index {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<ConvertError>,
    },

    /// A map entry failed to convert
    #[error("entry at key '{key}': {source}")]
    Entry {
        key: String,
        #[source]
        source: Box<ConvertError>,
    },
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ConvertError {
    /// Create an unparseable string error
    pub fn unparseable(input: impl Into<String>, target: &'static str) -> Self {
        Self::UnparseableString {
            input: input.into(),
            target,
        }
    }

    /// Create an overflow error
    pub fn overflow(value: impl ToString, target: &'static str) -> Self {
        Self::Overflow {
            value: value.to_string(),
            target,
        }
    }

    /// Create an unsupported source type error
    pub fn unsupported(kind: &'static str, target: &'static str) -> Self {
        Self::UnsupportedType { kind, target }
    }

    /// Create a nil disallowed error
    pub fn nil_disallowed(operation: &'static str) -> Self {
        Self::NilDisallowed { operation }
    }

    /// Create an invalid duration error
    pub fn invalid_duration(input: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidDuration {
            input: input.into(),
            reason,
        }
    }

    /// Create a JSON error from any displayable cause
    pub fn json(cause: impl std::fmt::Display) -> Self {
        Self::Json {
            message: cause.to_string(),
        }
    }

    /// Attach the index of the failing element
    pub fn at_index(self, index: usize) -> Self {
        Self::Element {
            index,
            source: Box::new(self),
        }
    }

    /// Attach the key of the failing entry
    pub fn at_key(self, key: impl Into<String>) -> Self {
        Self::Entry {
            key: key.into(),
            source: Box::new(self),
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl ConvertError {
    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnparseableString { .. } => "CONVERT_UNPARSEABLE_STRING",
            Self::Overflow { .. } => "CONVERT_OVERFLOW",
            Self::UnsupportedType { .. } => "CONVERT_UNSUPPORTED_TYPE",
            Self::NilDisallowed { .. } => "CONVERT_NIL_DISALLOWED",
            Self::InvalidTime { .. } => "CONVERT_INVALID_TIME",
            Self::InvalidDuration { .. } => "CONVERT_INVALID_DURATION",
            Self::Json { .. } => "CONVERT_JSON",
            Self::Element { source, .. } | Self::Entry { source, .. } => source.code(),
        }
    }

    /// The innermost error, skipping element/entry context
    pub fn root(&self) -> &Self {
        match self {
            Self::Element { source, .. } | Self::Entry { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this is (or wraps) an overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self.root(), Self::Overflow { .. })
    }

    /// Check if this is (or wraps) an unparseable string
    pub fn is_unparseable(&self) -> bool {
        matches!(self.root(), Self::UnparseableString { .. })
    }

    /// Check if this is (or wraps) an unsupported source type
    pub fn is_unsupported(&self) -> bool {
        matches!(self.root(), Self::UnsupportedType { .. })
    }
}
