//! Natural logarithm.
//!
//! `x` is split into `2^k · f` with `f ∈ [1, 2)` straight from the bit
//! pattern. When `f > √2` it is halved (and `k` bumped) so that
//! `f ∈ (√2/2, √2]` and `s = (f-1)/(f+1)` stays below `0.172`. Then
//!
//! ```text
//! log(f) = log((1+s)/(1-s)) = 2s + s·s²·L(s²)
//! log(x) = k·ln2_hi + (k·ln2_lo + log(f))
//! ```
//!
//! where `L` carries the fdlibm coefficients `Lg1..Lg6`.

use crate::bits::{is_inf, is_nan, nan};
use crate::exp::{LN2_HI, LN2_LO};

const SQRT2: f32 = std::f32::consts::SQRT_2;

const L1: f32 = 6.666666666666735130e-01;
const L2: f32 = 3.999999999940941908e-01;
const L3: f32 = 2.857142874366239149e-01;
const L4: f32 = 2.222219843214978396e-01;
const L5: f32 = 1.818357216161805012e-01;
const L6: f32 = 1.531383769920937332e-01;

const EXP_MASK: u32 = 0x7F80_0000;
const EXP_BIAS: i32 = 127;
const TWO_23: f32 = 8388608.0;

#[inline]
fn kernel(s: f32) -> f32 {
    let z = s * s;
    let p = L1 + z * (L2 + z * (L3 + z * (L4 + z * (L5 + z * L6))));
    2.0 * s + s * z * p
}

/// Natural logarithm of `x`.
///
/// ```text
/// log(NaN)   = NaN
/// log(x < 0) = NaN
/// log(±0)    = -Inf
/// log(+Inf)  = +Inf
/// log(1)     = 0
/// ```
///
/// # Example
///
/// ```rust
/// use math32::log;
///
/// assert_eq!(log(1.0), 0.0);
/// assert!((log(std::f32::consts::E) - 1.0).abs() < 1e-6);
/// ```
pub fn log(x: f32) -> f32 {
    if is_nan(x) {
        return x;
    }
    if x < 0.0 {
        return nan();
    }
    if x == 0.0 {
        return f32::NEG_INFINITY;
    }
    if is_inf(x, 1) {
        return x;
    }

    let mut bits = x.to_bits();
    let mut e = ((bits & EXP_MASK) >> 23) as i32;
    if e == 0 {
        bits = (x * TWO_23).to_bits();
        e = ((bits & EXP_MASK) >> 23) as i32 - 23;
    }
    let mut k = e - EXP_BIAS;

    // keep the mantissa, force the exponent to 0 so f ∈ [1, 2)
    let mut f = f32::from_bits((bits & !EXP_MASK) | ((EXP_BIAS as u32) << 23));
    if f > SQRT2 {
        f *= 0.5;
        k += 1;
    }

    let s = (f - 1.0) / (f + 1.0);
    let kf = k as f32;
    kf * LN2_HI + (kf * LN2_LO + kernel(s))
}
