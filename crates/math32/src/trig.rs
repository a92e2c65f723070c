//! Sine, cosine and tangent.
//!
//! # Argument reduction
//!
//! `|x|` is reduced to `y ∈ [0, π/2)` with a quadrant index
//! `j = trunc(|x| · 2/π)`:
//!
//! ```text
//! y = |x| - j·PIO2_HI - j·PIO2_LO
//! ```
//!
//! `PIO2_HI` has only 8 significant bits, so `j·PIO2_HI` is exact for any
//! quadrant count below 2^16 and the first subtraction loses nothing. This
//! path is used below `2^14`, where the reduced argument is within `5e-7`.
//!
//! From `2^14` up to `f32::MAX` the product `|x| · 2/π` is formed exactly
//! (Payne-Hanek): the 24-bit mantissa is multiplied by a 96-bit window of
//! the binary expansion of `2/π` chosen by the exponent. Bits that only
//! contribute multiples of 4 are skipped, so the two integer bits give the
//! quadrant and the remaining fraction gives `y`. The reduced argument is
//! within `2e-7` of the true one for every finite input, and the results
//! stay in `[-1, 1]`.
//!
//! # Kernels
//!
//! Both kernels are the fdlibm double-precision minimax polynomials,
//! evaluated in `f32`:
//!
//! ```text
//! sin(y) = y + y³·S(y²)          S of degree 4 in y²
//! cos(y) = 1 - y²/2 + y⁴·C(y²)   C of degree 4 in y²
//! ```

use crate::bits::{is_inf, is_nan, nan};

const PIO2_HI: f32 = 1.5703125;
const PIO2_LO: f32 = 4.83826794897e-4;
const INV_PIO2: f32 = 6.36619772367581382433e-01;

const S1: f32 = -1.66666666666666324348e-01;
const S2: f32 = 8.33333333332248946124e-03;
const S3: f32 = -1.98412698298579493134e-04;
const S4: f32 = 2.75573137070700676789e-06;
const S5: f32 = -2.50507602534068634195e-08;

const C1: f32 = 4.16666666666666019037e-02;
const C2: f32 = -1.38888888888741095749e-03;
const C3: f32 = 2.48015872894767294178e-05;
const C4: f32 = -2.75573143513906633035e-07;
const C5: f32 = 2.08757232129817482790e-09;

#[inline]
fn sin_kernel(y: f32) -> f32 {
    let z = y * y;
    y + y * z * (S1 + z * (S2 + z * (S3 + z * (S4 + z * S5))))
}

#[inline]
fn cos_kernel(y: f32) -> f32 {
    let z = y * y;
    1.0 - 0.5 * z + z * z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * C5))))
}

/// Start of the Payne-Hanek range.
const REDUCE_LARGE: f32 = 16384.0;

/// Leading 256 bits of the fraction `2/π`, most significant first.
const TWO_OVER_PI: [u32; 8] = [
    0xA2F9836E, 0x4E441529, 0xFC2757D1, 0xF534DDC0, 0xDB629599, 0x3C439041, 0xFE5163AB, 0xDEBBC561,
];

/// `π/2 · 2^-64`, scales a 64-bit fixed-point fraction to radians.
const PIO2_2_NEG64: f32 = 8.515_303e-20;

/// Reduces a non-negative finite `ax` to `(quadrant, y)`.
#[inline]
fn reduce(ax: f32) -> (u32, f32) {
    if ax >= REDUCE_LARGE {
        return reduce_large(ax);
    }
    let j = (ax * INV_PIO2) as u32;
    let jf = j as f32;
    (j, ax - jf * PIO2_HI - jf * PIO2_LO)
}

/// Exact reduction for `ax >= 2^14`, where `ax = m · 2^k` with a 24-bit `m`.
fn reduce_large(ax: f32) -> (u32, f32) {
    let bits = ax.to_bits();
    let k = ((bits >> 23) & 0xff) as i32 - 150;
    let m = ((bits & 0x007f_ffff) | 0x0080_0000) as u128;

    // bit i of 2/π weighs 2^(k-i) against m; i <= k-2 only adds multiples of 4
    let first = (k - 1).max(1);
    let shift = (first + 95 - k) as u32;

    let start = (first - 1) as usize;
    let (word, offset) = (start / 32, start % 32);
    let acc = TWO_OVER_PI[word..word + 4]
        .iter()
        .fold(0u128, |acc, &w| (acc << 32) | w as u128);
    let window = (acc << offset) >> 32;

    let product = m * window;
    let quadrant = ((product >> shift) & 3) as u32;
    let frac = ((product << (128 - shift)) >> 64) as u64;
    (quadrant, frac as f32 * PIO2_2_NEG64)
}

/// Sine of `x` (radians).
///
/// ```text
/// sin(±0)   = ±0
/// sin(±Inf) = NaN
/// sin(NaN)  = NaN
/// ```
pub fn sin(x: f32) -> f32 {
    if x == 0.0 || is_nan(x) {
        return x;
    }
    if is_inf(x, 0) {
        return nan();
    }

    let (j, y) = reduce(x.abs());
    let r = match j & 3 {
        0 => sin_kernel(y),
        1 => cos_kernel(y),
        2 => -sin_kernel(y),
        _ => -cos_kernel(y),
    };
    if x < 0.0 { -r } else { r }
}

/// Cosine of `x` (radians).
///
/// ```text
/// cos(±0)   = 1
/// cos(±Inf) = NaN
/// cos(NaN)  = NaN
/// ```
pub fn cos(x: f32) -> f32 {
    if is_nan(x) {
        return x;
    }
    if is_inf(x, 0) {
        return nan();
    }

    let (j, y) = reduce(x.abs());
    match j & 3 {
        0 => cos_kernel(y),
        1 => -sin_kernel(y),
        2 => -cos_kernel(y),
        _ => sin_kernel(y),
    }
}

/// Tangent of `x` (radians).
///
/// Even quadrants return `sin(y)/cos(y)`, odd quadrants `-cos(y)/sin(y)`.
/// Near odd multiples of π/2 the result is large but finite.
///
/// ```text
/// tan(±0)   = ±0
/// tan(±Inf) = NaN
/// tan(NaN)  = NaN
/// ```
pub fn tan(x: f32) -> f32 {
    if x == 0.0 || is_nan(x) {
        return x;
    }
    if is_inf(x, 0) {
        return nan();
    }

    let (j, y) = reduce(x.abs());
    let s = sin_kernel(y);
    let c = cos_kernel(y);
    let r = if j & 1 == 0 { s / c } else { -c / s };
    if x < 0.0 { -r } else { r }
}

/// Sine and cosine of `x` from a single argument reduction.
///
/// Equivalent to `(sin(x), cos(x))`, including the special cases.
///
/// # Example
///
/// ```rust
/// use math32::sin_cos;
///
/// let (s, c) = sin_cos(0.0);
/// assert_eq!((s, c), (0.0, 1.0));
/// ```
pub fn sin_cos(x: f32) -> (f32, f32) {
    if is_nan(x) {
        return (x, x);
    }
    if is_inf(x, 0) {
        return (nan(), nan());
    }
    if x == 0.0 {
        return (x, 1.0);
    }

    let (j, y) = reduce(x.abs());
    let sk = sin_kernel(y);
    let ck = cos_kernel(y);
    let (s, c) = match j & 3 {
        0 => (sk, ck),
        1 => (ck, -sk),
        2 => (-sk, -ck),
        _ => (-ck, sk),
    };
    if x < 0.0 { (-s, c) } else { (s, c) }
}
