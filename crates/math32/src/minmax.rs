//! Minimum and maximum.
//!
//! Unlike [`f32::max`], a NaN in either argument always yields NaN.
//! Which zero wins between `+0.0` and `-0.0` depends on the backend and
//! is not part of the contract.

use crate::backend::{Native, Primitives};
use crate::bits::{is_inf, is_nan, nan};

/// Larger of `x` and `y`.
///
/// ```text
/// max(x, NaN)  = max(NaN, y) = NaN
/// max(x, +Inf) = max(+Inf, y) = +Inf
/// ```
#[inline]
pub fn max(x: f32, y: f32) -> f32 {
    if is_nan(x) || is_nan(y) {
        return nan();
    }
    if is_inf(x, 1) || is_inf(y, 1) {
        return f32::INFINITY;
    }
    Native::max(x, y)
}

/// Smaller of `x` and `y`.
///
/// ```text
/// min(x, NaN)  = min(NaN, y) = NaN
/// min(x, -Inf) = min(-Inf, y) = -Inf
/// ```
#[inline]
pub fn min(x: f32, y: f32) -> f32 {
    if is_nan(x) || is_nan(y) {
        return nan();
    }
    if is_inf(x, -1) || is_inf(y, -1) {
        return f32::NEG_INFINITY;
    }
    Native::min(x, y)
}
