//! Arcsine and arccosine.
//!
//! Both share one polynomial `P(z)` on `z ∈ [0, 0.25]`, where
//! `asin(x) ≈ x + x³·P(x²)` for `|x| ≤ 0.5`. Beyond 0.5 the half-angle
//! identity moves the argument back into range and avoids the singular
//! slope at `|x| = 1`:
//!
//! ```text
//! asin(x) = π/2 - 2·asin(√((1-x)/2))
//! acos(x) = 2·asin(√((1-x)/2))          x > 0.5
//! acos(x) = π - 2·asin(√((1+x)/2))      x < -0.5
//! acos(x) = π/2 - asin(x)               otherwise
//! ```

use crate::bits::{is_nan, nan};
use crate::sqrt::sqrt;
use std::f32::consts::{FRAC_PI_2, PI};

const P0: f32 = 1.6666586697e-01;
const P1: f32 = 7.4953002686e-02;
const P2: f32 = 4.5470025998e-02;
const P3: f32 = 2.4181311049e-02;
const P4: f32 = 4.2163199048e-02;

#[inline]
fn poly(z: f32) -> f32 {
    P0 + z * (P1 + z * (P2 + z * (P3 + z * P4)))
}

/// `asin(√z)` for `z ∈ [0, 0.25]`.
#[inline]
fn asin_half(z: f32) -> f32 {
    let s = sqrt(z);
    s + s * z * poly(z)
}

/// Arcsine of `x`, in `[-π/2, π/2]`.
///
/// ```text
/// asin(±0)     = ±0
/// asin(|x| > 1) = NaN
/// asin(NaN)    = NaN
/// ```
pub fn asin(x: f32) -> f32 {
    if x == 0.0 || is_nan(x) {
        return x;
    }

    let ax = x.abs();
    if ax > 1.0 {
        return nan();
    }

    let r = if ax <= 0.5 {
        let z = ax * ax;
        ax + ax * z * poly(z)
    } else {
        FRAC_PI_2 - 2.0 * asin_half((1.0 - ax) * 0.5)
    };
    if x < 0.0 { -r } else { r }
}

/// Arccosine of `x`, in `[0, π]`.
///
/// ```text
/// acos(1)       = 0
/// acos(-1)      = π
/// acos(|x| > 1) = NaN
/// acos(NaN)     = NaN
/// ```
pub fn acos(x: f32) -> f32 {
    if is_nan(x) {
        return x;
    }
    if !(-1.0..=1.0).contains(&x) {
        return nan();
    }
    if x == 1.0 {
        return 0.0;
    }
    if x == -1.0 {
        return PI;
    }

    if x > 0.5 {
        2.0 * asin_half((1.0 - x) * 0.5)
    } else if x < -0.5 {
        PI - 2.0 * asin_half((1.0 + x) * 0.5)
    } else {
        FRAC_PI_2 - asin(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::signbit;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_6;

    #[test]
    fn test_asin_known() {
        assert_abs_diff_eq!(asin(0.5), FRAC_PI_6, epsilon = 1e-6);
        assert_abs_diff_eq!(asin(1.0), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(asin(-1.0), -FRAC_PI_2, epsilon = 1e-6);
        assert!(signbit(asin(-0.0)));
    }

    #[test]
    fn test_acos_known() {
        assert_eq!(acos(1.0), 0.0);
        assert_eq!(acos(-1.0), PI);
        assert_abs_diff_eq!(acos(0.0), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(acos(0.5), 2.0 * FRAC_PI_6, epsilon = 2e-6);
    }

    #[test]
    fn test_out_of_domain() {
        assert!(asin(1.0001).is_nan());
        assert!(asin(-2.0).is_nan());
        assert!(asin(f32::INFINITY).is_nan());
        assert!(acos(1.0001).is_nan());
        assert!(acos(f32::NEG_INFINITY).is_nan());
        assert!(asin(f32::NAN).is_nan());
        assert!(acos(f32::NAN).is_nan());
    }

    #[test]
    fn test_against_std() {
        for i in -1000..=1000 {
            let x = i as f32 / 1000.0;
            assert_abs_diff_eq!(asin(x), x.asin(), epsilon = 1e-6);
            assert_abs_diff_eq!(acos(x), x.acos(), epsilon = 2e-6);
        }
    }
}
