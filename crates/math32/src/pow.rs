//! Power function.

use crate::bits::{abs, copysign, is_inf, is_nan, nan};
use crate::exp::{OVERFLOW, UNDERFLOW, exp};
use crate::log::log;
use crate::round::floor;
use crate::sqrt::sqrt;

/// Above 2^24 every `f32` is an even integer.
const TWO_24: f32 = 16777216.0;

#[inline]
fn is_integer(y: f32) -> bool {
    !is_nan(y) && !is_inf(y, 0) && floor(y) == y
}

#[inline]
fn is_odd_integer(y: f32) -> bool {
    is_integer(y) && abs(y) <= TWO_24 && (y as i32) & 1 == 1
}

/// `x` raised to the power `y`.
///
/// Special cases, checked in this order:
///
/// ```text
/// pow(x, ±0)            = 1        for any x, even NaN
/// pow(1, y)             = 1        for any y, even NaN
/// pow(x, 1)             = x
/// pow(NaN, y)           = pow(x, NaN) = NaN
/// pow(±0, y < 0)        = ±Inf for odd integer y, else +Inf
/// pow(±0, y > 0)        = ±0   for odd integer y, else +0
/// pow(-1, ±Inf)         = 1
/// pow(|x| > 1, +Inf)    = +Inf,  pow(|x| < 1, +Inf) = +0
/// pow(|x| < 1, -Inf)    = +Inf,  pow(|x| > 1, -Inf) = +0
/// pow(+Inf, y)          = +Inf for y > 0, else +0
/// pow(-Inf, y)          = pow(-0, -y)
/// pow(x < 0, y)         = NaN for non-integer y
/// ```
///
/// A negative base with an integer exponent returns `±pow(|x|, y)` by the
/// parity of `y`. Positive finite bases use `exp(y·log(x))`, with exact
/// shortcuts for `y` of `2`, `0.5` and `-1`.
///
/// # Example
///
/// ```rust
/// use math32::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(-0.0, -1.0), f32::NEG_INFINITY);
/// assert!(pow(-2.0, 0.5).is_nan());
/// ```
pub fn pow(x: f32, y: f32) -> f32 {
    if y == 0.0 || x == 1.0 {
        return 1.0;
    }
    if y == 1.0 {
        return x;
    }
    if is_nan(x) || is_nan(y) {
        return nan();
    }

    if x == 0.0 {
        let odd = is_odd_integer(y);
        return match (y < 0.0, odd) {
            (true, true) => copysign(f32::INFINITY, x),
            (true, false) => f32::INFINITY,
            (false, true) => x,
            (false, false) => 0.0,
        };
    }

    if is_inf(y, 0) {
        if x == -1.0 {
            return 1.0;
        }
        let grows = if y > 0.0 { abs(x) > 1.0 } else { abs(x) < 1.0 };
        return if grows { f32::INFINITY } else { 0.0 };
    }

    if is_inf(x, 1) {
        return if y > 0.0 { f32::INFINITY } else { 0.0 };
    }
    if is_inf(x, -1) {
        return pow(-0.0, -y);
    }

    if x < 0.0 {
        if !is_integer(y) {
            return nan();
        }
        let r = pow_positive(-x, y);
        return if is_odd_integer(y) { -r } else { r };
    }

    pow_positive(x, y)
}

/// `x^y` for finite `x > 0` and finite `y`.
fn pow_positive(x: f32, y: f32) -> f32 {
    if y == 2.0 {
        return x * x;
    }
    if y == 0.5 {
        return sqrt(x);
    }
    if y == -1.0 {
        return 1.0 / x;
    }

    let t = y * log(x);
    if t > OVERFLOW {
        return f32::INFINITY;
    }
    if t < UNDERFLOW {
        return 0.0;
    }
    exp(t)
}
