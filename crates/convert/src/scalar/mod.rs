//! Scalar targets
//!
//! Numeric, boolean, string and byte coercions, the checked narrowing they
//! share and the string parsers behind the fallback chain.

pub mod boolean;
pub mod narrow;
pub mod number;
pub mod parse;
pub mod text;

pub use narrow::{Integer, NATIVE_INT_BITS, narrow};
pub use number::Numeric;
pub use text::render;
