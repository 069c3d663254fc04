//! Box and unbox helpers

/// Put `value` on the heap
pub fn to_ptr<T>(value: T) -> Box<T> {
    Box::new(value)
}

/// Copy the value behind a reference
pub fn from_ptr<T: Clone>(ptr: &T) -> T {
    ptr.clone()
}

/// Copy the value behind an optional reference, or return `default`
pub fn from_ptr_or<T: Clone>(ptr: Option<&T>, default: T) -> T {
    ptr.cloned().unwrap_or(default)
}
