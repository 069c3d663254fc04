//! Overflow-checked integer narrowing
//!
//! A plain `as` cast silently wraps (`300_i32 as i8 == 44`). Every integer
//! conversion in this crate instead widens the source to `i128`, which holds
//! every supported width exactly, and rejects anything outside the target's
//! `[MIN, MAX]`.
//!
//! ```rust
//! use nebula_convert::scalar::narrow::narrow;
//!
//! assert_eq!(narrow::<i32, i8>(127).unwrap(), 127);
//! assert!(narrow::<i32, i8>(300).unwrap_err().is_overflow());
//! assert!(narrow::<i64, u8>(-1).unwrap_err().is_overflow());
//! ```

use std::fmt::Display;

use tracing::trace;

use crate::error::{ConvertError, ConvertResult};
use crate::core::display::format_f64;

/// Bit width assumed for `isize`/`usize` bounds
///
/// The target's pointer width unless the `native-int-32` feature pins the
/// conservative 32-bit bounds, so that results do not depend on the build
/// machine.
#[cfg(feature = "native-int-32")]
pub const NATIVE_INT_BITS: u32 = 32;

/// Bit width assumed for `isize`/`usize` bounds
///
/// The target's pointer width unless the `native-int-32` feature pins the
/// conservative 32-bit bounds, so that results do not depend on the build
/// machine.
#[cfg(not(feature = "native-int-32"))]
pub const NATIVE_INT_BITS: u32 = usize::BITS;

/// An integer width that can be narrowed into
pub trait Integer: Copy + Display {
    /// Rust name of the type, used in error messages
    const NAME: &'static str;
    /// Smallest representable value
    const MIN: i128;
    /// Largest representable value
    const MAX: i128;

    /// Widen losslessly
    fn to_i128(self) -> i128;

    /// Cast down; only called once `v` is known to be in `[MIN, MAX]`
    fn from_i128_unchecked(v: i128) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integer for $ty {
                const NAME: &'static str = stringify!($ty);
                const MIN: i128 = <$ty>::MIN as i128;
                const MAX: i128 = <$ty>::MAX as i128;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128_unchecked(v: i128) -> Self {
                    v as $ty
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Integer for isize {
    const NAME: &'static str = "isize";
    const MIN: i128 = -(1_i128 << (NATIVE_INT_BITS - 1));
    const MAX: i128 = (1_i128 << (NATIVE_INT_BITS - 1)) - 1;

    #[inline]
    fn to_i128(self) -> i128 {
        self as i128
    }

    #[inline]
    fn from_i128_unchecked(v: i128) -> Self {
        v as isize
    }
}

impl Integer for usize {
    const NAME: &'static str = "usize";
    const MIN: i128 = 0;
    const MAX: i128 = (1_i128 << NATIVE_INT_BITS) - 1;

    #[inline]
    fn to_i128(self) -> i128 {
        self as i128
    }

    #[inline]
    fn from_i128_unchecked(v: i128) -> Self {
        v as usize
    }
}

/// Convert between two integer widths, rejecting values that do not fit
#[inline]
pub fn narrow<F: Integer, T: Integer>(value: F) -> ConvertResult<T> {
    narrow_wide(value.to_i128())
}

/// Narrow an already widened integer into `T`
pub fn narrow_wide<T: Integer>(value: i128) -> ConvertResult<T> {
    if value < T::MIN || value > T::MAX {
        trace!(value = %value, target_type = T::NAME, "integer overflow");
        return Err(ConvertError::overflow(value, T::NAME));
    }
    Ok(T::from_i128_unchecked(value))
}

/// Truncate a float toward zero into `T`
///
/// NaN, infinities and values whose integral part is out of range are
/// rejected as overflow instead of saturating.
pub fn float_to_int<T: Integer>(value: f64) -> ConvertResult<T> {
    if !value.is_finite() {
        trace!(value = %value, target_type = T::NAME, "non-finite float");
        return Err(ConvertError::overflow(format_f64(value), T::NAME));
    }
    // Saturates at the i128 bounds, which are outside every target range.
    let wide = value.trunc() as i128;
    if wide < T::MIN || wide > T::MAX {
        trace!(value = %value, target_type = T::NAME, "float out of integer range");
        return Err(ConvertError::overflow(format_f64(value), T::NAME));
    }
    Ok(T::from_i128_unchecked(wide))
}
