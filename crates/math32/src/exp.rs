//! Natural exponential and power-of-two scaling.
//!
//! `exp` writes `x = k·ln2 + r` with `|r| ≤ ln2/2`, evaluates a degree-6
//! Taylor polynomial for `exp(r)`, then scales by `2^k` through
//! [`ldexp`], which edits the exponent field directly instead of
//! multiplying.

use crate::bits::{INF_BITS, SIGN_MASK, is_inf, is_nan};

pub(crate) const LN2_HI: f32 = 6.9314575195e-01;
pub(crate) const LN2_LO: f32 = 1.4286067653e-06;
const INV_LN2: f32 = 1.44269504088896338700;

/// `ln(2^128)`. Larger arguments overflow to `+Inf`.
pub(crate) const OVERFLOW: f32 = 88.72283905206835;
/// `ln(2^-150)`. Smaller arguments underflow to `0`.
pub(crate) const UNDERFLOW: f32 = -103.97207708399179;

const E2: f32 = 5.0000000000e-01;
const E3: f32 = 1.6666666667e-01;
const E4: f32 = 4.1666666667e-02;
const E5: f32 = 8.3333333333e-03;
const E6: f32 = 1.3888888889e-03;

const EXP_MASK: u32 = 0x7F80_0000;
const MANT_MASK: u32 = 0x007F_FFFF;
const IMPLICIT_BIT: u32 = 0x0080_0000;
/// 2^23, lifts a denormal into the normal range.
const TWO_23: f32 = 8388608.0;

/// `exp(r)` for `|r| ≤ ln2/2`.
#[inline]
fn kernel(r: f32) -> f32 {
    let p = E2 + r * (E3 + r * (E4 + r * (E5 + r * E6)));
    1.0 + r + r * r * p
}

/// `e` raised to `x`.
///
/// ```text
/// exp(NaN)      = NaN
/// exp(+Inf)     = +Inf
/// exp(-Inf)     = 0
/// exp(x > 88.7) = +Inf
/// exp(x < -104) = 0
/// ```
///
/// # Example
///
/// ```rust
/// use math32::exp;
///
/// assert_eq!(exp(0.0), 1.0);
/// assert!((exp(1.0) - std::f32::consts::E).abs() < 1e-5);
/// ```
pub fn exp(x: f32) -> f32 {
    if is_nan(x) || is_inf(x, 1) {
        return x;
    }
    if is_inf(x, -1) {
        return 0.0;
    }
    if x > OVERFLOW {
        return f32::INFINITY;
    }
    if x < UNDERFLOW {
        return 0.0;
    }

    // k = round(x / ln2), ties away from zero
    let t = x * INV_LN2;
    let k = if x < 0.0 { (t - 0.5) as i32 } else { (t + 0.5) as i32 };
    let kf = k as f32;
    let r = (x - kf * LN2_HI) - kf * LN2_LO;

    ldexp(kernel(r), k)
}

/// `x · 2^e`, computed on the exponent field.
///
/// Results that leave the normal range are handled explicitly: an
/// exponent of 255 or more saturates to a signed infinity, a small
/// exponent produces a denormal (the shifted-out mantissa bits are
/// truncated) or a signed zero.
///
/// ```text
/// ldexp(±0, e)   = ±0
/// ldexp(±Inf, e) = ±Inf
/// ldexp(NaN, e)  = NaN
/// ```
///
/// # Example
///
/// ```rust
/// use math32::ldexp;
///
/// assert_eq!(ldexp(1.5, 3), 12.0);
/// assert_eq!(ldexp(1.0, 200), f32::INFINITY);
/// assert_eq!(ldexp(-1.0, -200), -0.0);
/// ```
pub fn ldexp(x: f32, e: i32) -> f32 {
    if x == 0.0 || is_nan(x) || is_inf(x, 0) {
        return x;
    }

    let mut bits = x.to_bits();
    let mut exp = ((bits & EXP_MASK) >> 23) as i32;
    if exp == 0 {
        // denormal: renormalize, remember the 2^23 we multiplied in
        bits = (x * TWO_23).to_bits();
        exp = ((bits & EXP_MASK) >> 23) as i32 - 23;
    }

    let sign = bits & SIGN_MASK;
    let new_exp = exp.saturating_add(e);

    if new_exp >= 0xFF {
        return f32::from_bits(sign | INF_BITS);
    }
    if new_exp <= 0 {
        if new_exp <= -24 {
            return f32::from_bits(sign);
        }
        let mant = ((bits & MANT_MASK) | IMPLICIT_BIT) >> (1 - new_exp) as u32;
        return f32::from_bits(sign | mant);
    }

    f32::from_bits((bits & !EXP_MASK) | ((new_exp as u32) << 23))
}
