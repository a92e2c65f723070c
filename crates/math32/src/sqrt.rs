//! Square root.

use crate::backend::{Native, Primitives};
use crate::bits::{is_inf, is_nan, nan};

/// Square root of `x`.
///
/// ```text
/// sqrt(x < 0) = NaN
/// sqrt(±0)    = ±0
/// sqrt(+Inf)  = +Inf
/// sqrt(NaN)   = NaN
/// ```
///
/// Finite positive arguments go to the backend, which is correctly rounded
/// on every target.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    if x == 0.0 || is_nan(x) || is_inf(x, 1) {
        return x;
    }
    if x < 0.0 {
        return nan();
    }
    Native::sqrt(x)
}
