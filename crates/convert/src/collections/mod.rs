//! Collection targets
//!
//! `Vec<T>` and `BTreeMap<String, T>` coerce element by element through the
//! element type's [`Coerce`](crate::Coerce) impl, so nesting composes. A
//! failing element is reported with its index or key.

pub mod map;
pub mod slice;

pub use map::coerce_multimap;
pub use slice::coerce_elements;
