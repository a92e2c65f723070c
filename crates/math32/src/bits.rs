//! IEEE-754 single-precision bit classification.
//!
//! Layout of an `f32`:
//!
//! ```text
//!  31 | 30 ........ 23 | 22 ..................... 0
//! sign|    exponent    |         mantissa
//! ```
//!
//! Infinity is an all-ones exponent with a zero mantissa; NaN is an
//! all-ones exponent with a nonzero mantissa. Every helper here is a
//! single compare or mask and never allocates.

/// Sign bit mask.
pub(crate) const SIGN_MASK: u32 = 0x8000_0000;

/// Exponent and mantissa bits (everything except the sign).
pub(crate) const MAGNITUDE_MASK: u32 = 0x7FFF_FFFF;

/// Bit pattern of `+Inf`.
pub(crate) const INF_BITS: u32 = 0x7F80_0000;

/// Canonical quiet NaN.
pub(crate) const QUIET_NAN_BITS: u32 = 0x7FC0_0000;

/// Reports whether `x` is NaN.
///
/// NaN is the only value that compares unequal to itself.
///
/// # Example
///
/// ```rust
/// use math32::{is_nan, nan};
///
/// assert!(is_nan(nan()));
/// assert!(!is_nan(1.0));
/// ```
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan(x: f32) -> bool {
    x != x
}

/// Reports whether `x` is an infinity, filtered by `sign`.
///
/// - `sign > 0`: only `+Inf` matches
/// - `sign < 0`: only `-Inf` matches
/// - `sign == 0`: either infinity matches
///
/// # Example
///
/// ```rust
/// use math32::is_inf;
///
/// assert!(is_inf(f32::INFINITY, 1));
/// assert!(!is_inf(f32::INFINITY, -1));
/// assert!(is_inf(f32::NEG_INFINITY, 0));
/// ```
#[inline]
pub fn is_inf(x: f32, sign: i32) -> bool {
    let bits = x.to_bits();
    if bits & MAGNITUDE_MASK != INF_BITS {
        return false;
    }

    let negative = bits & SIGN_MASK != 0;
    match sign {
        0 => true,
        s if s > 0 => !negative,
        _ => negative,
    }
}

/// Reports whether the sign bit of `x` is set.
///
/// True for `-0.0` and for NaNs carrying a sign bit.
#[inline]
pub fn signbit(x: f32) -> bool {
    x.to_bits() & SIGN_MASK != 0
}

/// Returns the canonical quiet NaN (`0x7FC00000`).
#[inline]
pub fn nan() -> f32 {
    f32::from_bits(QUIET_NAN_BITS)
}

/// Returns `+Inf` when `sign >= 0`, `-Inf` otherwise.
#[inline]
pub fn inf(sign: i32) -> f32 {
    if sign >= 0 {
        f32::from_bits(INF_BITS)
    } else {
        f32::from_bits(INF_BITS | SIGN_MASK)
    }
}

/// Absolute value by clearing the sign bit.
///
/// NaN payloads are preserved.
#[inline]
pub fn abs(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & MAGNITUDE_MASK)
}

/// Returns a value with the magnitude of `x` and the sign of `sign`.
#[inline]
pub fn copysign(x: f32, sign: f32) -> f32 {
    f32::from_bits((x.to_bits() & MAGNITUDE_MASK) | (sign.to_bits() & SIGN_MASK))
}
