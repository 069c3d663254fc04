//! Core modules
//!
//! The dynamic value model every conversion starts from.
//!
//! ## Core Components
//!
//! ### [`value`] - The Value enum
//!
//! [`Value`] is a closed sum type over every shape a loosely-typed input can
//! take: primitives of each width, text and bytes, time and duration,
//! collections, pointers (including typed nils) and capability payloads.
//!
//! ### [`kind`] - Type classification
//!
//! [`ValueKind`] names the shape of a value for error messages and remembers
//! the pointee of a nil pointer.
//!
//! ### [`indirect`] - Pointer normalization
//!
//! [`indirect`](indirect::indirect) strips pointer layers before dispatch.
//!
//! ### [`display`] and [`serde`]
//!
//! Canonical text rendering and JSON bridging.
pub mod display;
pub mod indirect;
pub mod kind;
pub mod serde;
pub mod value;

pub use indirect::indirect;
pub use kind::ValueKind;
pub use value::{Opaque, OpaqueValue, Pointer, Value};
