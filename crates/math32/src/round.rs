//! Rounding to integral values.
//!
//! All four functions return `±0`, `±Inf` and NaN unchanged, then hand
//! finite nonzero arguments to the build's [`Native`] backend.
//!
//! | Function | Direction | `2.5` | `-2.5` |
//! |----------|-----------|-------|--------|
//! | [`floor`] | toward -Inf | 2 | -3 |
//! | [`ceil`] | toward +Inf | 3 | -2 |
//! | [`round`] | nearest, ties away from zero | 3 | -3 |
//! | [`trunc`] | toward zero | 2 | -2 |

use crate::backend::{Native, Primitives};
use crate::bits::{is_inf, is_nan};

#[inline]
fn passthrough(x: f32) -> bool {
    x == 0.0 || is_nan(x) || is_inf(x, 0)
}

/// Greatest integer value less than or equal to `x`.
///
/// ```text
/// floor(±0)   = ±0
/// floor(±Inf) = ±Inf
/// floor(NaN)  = NaN
/// ```
#[inline]
pub fn floor(x: f32) -> f32 {
    if passthrough(x) {
        return x;
    }
    Native::floor(x)
}

/// Least integer value greater than or equal to `x`.
///
/// ```text
/// ceil(±0)   = ±0
/// ceil(±Inf) = ±Inf
/// ceil(NaN)  = NaN
/// ```
#[inline]
pub fn ceil(x: f32) -> f32 {
    if passthrough(x) {
        return x;
    }
    Native::ceil(x)
}

/// Nearest integer, rounding half away from zero.
///
/// # Example
///
/// ```rust
/// use math32::round;
///
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -3.0);
/// ```
#[inline]
pub fn round(x: f32) -> f32 {
    if passthrough(x) {
        return x;
    }
    Native::round(x)
}

/// Integer part of `x`, rounding toward zero.
#[inline]
pub fn trunc(x: f32) -> f32 {
    if passthrough(x) {
        return x;
    }
    Native::trunc(x)
}
