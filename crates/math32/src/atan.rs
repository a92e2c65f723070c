//! Arctangent.
//!
//! `atan` folds `|x|` into `[0, tan(π/8)]` with two identities, then
//! evaluates a degree-17 odd polynomial:
//!
//! | Range of `|x|` | Identity |
//! |----------------|----------|
//! | `> tan(3π/8)` | `π/2 - atan(1/|x|)` |
//! | `> tan(π/8)` | `π/4 + atan((|x|-1)/(|x|+1))` |
//! | otherwise | direct |

use crate::bits::{is_inf, is_nan, nan, signbit};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const TAN_3PI_8: f32 = 2.414213562373095;
const TAN_PI_8: f32 = 0.4142135623730951;

const A0: f32 = -3.333314528e-01;
const A1: f32 = 1.999355085e-01;
const A2: f32 = -1.420889944e-01;
const A3: f32 = 1.065626393e-01;
const A4: f32 = -7.522124857e-02;
const A5: f32 = 4.263936017e-02;
const A6: f32 = -1.480085629e-02;
const A7: f32 = 2.417283948e-03;

const FRAC_3PI_4: f32 = 3.0 * FRAC_PI_4;

#[inline]
fn poly(x: f32) -> f32 {
    let z = x * x;
    let p = A0 + z * (A1 + z * (A2 + z * (A3 + z * (A4 + z * (A5 + z * (A6 + z * A7))))));
    x + x * z * p
}

/// Arctangent of `x`, in `[-π/2, π/2]`.
///
/// ```text
/// atan(±0)   = ±0
/// atan(±Inf) = ±π/2
/// atan(NaN)  = NaN
/// ```
pub fn atan(x: f32) -> f32 {
    if x == 0.0 || is_nan(x) {
        return x;
    }
    if is_inf(x, 1) {
        return FRAC_PI_2;
    }
    if is_inf(x, -1) {
        return -FRAC_PI_2;
    }

    let ax = x.abs();
    let r = if ax > TAN_3PI_8 {
        FRAC_PI_2 - poly(1.0 / ax)
    } else if ax > TAN_PI_8 {
        FRAC_PI_4 + poly((ax - 1.0) / (ax + 1.0))
    } else {
        poly(ax)
    };
    if x < 0.0 { -r } else { r }
}

/// Angle of the point `(x, y)` from the positive x axis, in `[-π, π]`.
///
/// Special cases, checked in this order:
///
/// ```text
/// atan2(NaN, x) = atan2(y, NaN) = NaN
/// atan2(±Inf, +Inf)    = ±π/4
/// atan2(±Inf, -Inf)    = ±3π/4
/// atan2(±Inf, x)       = ±π/2
/// atan2(y > 0, +Inf)   = +0
/// atan2(y < 0, +Inf)   = -0
/// atan2(±0, +Inf)      = ±0
/// atan2(y > 0, -Inf)   = +π
/// atan2(y < 0, -Inf)   = -π
/// atan2(±0, -Inf)      = ±π
/// atan2(y > 0, ±0)     = +π/2
/// atan2(y < 0, ±0)     = -π/2
/// atan2(±0, ±0)        = ±0
/// atan2(±0, x > 0)     = ±0
/// atan2(±0, x < 0)     = ±π
/// ```
///
/// Everything else is `atan(y/x)`, shifted by `±π` when `x < 0`.
///
/// # Example
///
/// ```rust
/// use math32::atan2;
/// use std::f32::consts::PI;
///
/// assert_eq!(atan2(0.0, -1.0), PI);
/// ```
pub fn atan2(y: f32, x: f32) -> f32 {
    if is_nan(y) || is_nan(x) {
        return nan();
    }

    if is_inf(y, 0) {
        let r = if is_inf(x, 1) {
            FRAC_PI_4
        } else if is_inf(x, -1) {
            FRAC_3PI_4
        } else {
            FRAC_PI_2
        };
        return if y > 0.0 { r } else { -r };
    }

    if is_inf(x, 1) {
        return if y > 0.0 {
            0.0
        } else if y < 0.0 {
            -0.0
        } else {
            y
        };
    }
    if is_inf(x, -1) {
        return if y > 0.0 || (y == 0.0 && !signbit(y)) { PI } else { -PI };
    }

    if x == 0.0 {
        return if y > 0.0 {
            FRAC_PI_2
        } else if y < 0.0 {
            -FRAC_PI_2
        } else {
            y
        };
    }

    if y == 0.0 {
        if x > 0.0 {
            return y;
        }
        return if signbit(y) { -PI } else { PI };
    }

    let q = atan(y / x);
    if x > 0.0 {
        q
    } else if y > 0.0 {
        q + PI
    } else {
        q - PI
    }
}
