//! Cross-function properties of the kernel set, swept over fixed grids.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use math32::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

fn grid(lo: f32, hi: f32, n: usize) -> impl Iterator<Item = f32> {
    (0..=n).map(move |i| lo + (hi - lo) * i as f32 / n as f32)
}

/// Positive values from 1e-3 to `f32::MAX`, spaced by a fixed ratio.
fn log_grid() -> impl Iterator<Item = f32> {
    std::iter::successors(Some(1.0e-3f32), |&x| Some(x * 1.031).filter(|v| v.is_finite()))
        .chain(std::iter::once(f32::MAX))
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn floor_ceil_bracket() {
    for x in grid(-1000.0, 1000.0, 7919) {
        assert!(floor(x) <= x && x <= ceil(x), "x = {}", x);
        assert!(ceil(x) - floor(x) <= 1.0);
    }
}

#[test]
fn rounding_idempotent() {
    for x in grid(-64.0, 64.0, 1031) {
        assert_eq!(floor(floor(x)), floor(x));
        assert_eq!(ceil(ceil(x)), ceil(x));
        assert_eq!(round(round(x)), round(x));
    }
}

#[test]
fn rounding_monotonic() {
    let xs: Vec<f32> = grid(-20.0, 20.0, 997).collect();
    for w in xs.windows(2) {
        assert!(floor(w[0]) <= floor(w[1]));
        assert!(ceil(w[0]) <= ceil(w[1]));
        assert!(round(w[0]) <= round(w[1]));
    }
}

// ============================================================================
// Min / max
// ============================================================================

#[test]
fn min_max_scenarios() {
    assert!(max(f32::NAN, 1.0).is_nan());
    assert_eq!(max(f32::INFINITY, 1.0), f32::INFINITY);
    for a in grid(-5.0, 5.0, 37) {
        for b in grid(-3.0, 7.0, 41) {
            assert!(min(a, b) <= max(a, b));
        }
    }
}

// ============================================================================
// Trigonometry
// ============================================================================

#[test]
fn pythagorean_identity() {
    for x in grid(-50.0, 50.0, 10007) {
        let (s, c) = (sin(x), cos(x));
        assert_abs_diff_eq!(s * s + c * c, 1.0, epsilon = 1e-6);
    }
    for x in log_grid() {
        for x in [x, -x] {
            let (s, c) = (sin(x), cos(x));
            assert!(s.abs() <= 1.0 && c.abs() <= 1.0, "x = {}", x);
            assert_abs_diff_eq!(s * s + c * c, 1.0, epsilon = 1e-6);
        }
    }
}

#[test]
fn sin_odd_cos_even() {
    for x in grid(0.0, 30.0, 3001) {
        assert_eq!(sin(-x), -sin(x));
        assert_eq!(cos(-x), cos(x));
        assert_eq!(tan(-x), -tan(x));
    }
    for x in log_grid() {
        assert_eq!(sin(-x), -sin(x));
        assert_eq!(cos(-x), cos(x));
        assert_eq!(tan(-x), -tan(x));
    }
}

#[test]
fn sin_periodic() {
    for x in grid(-3.0, 3.0, 601) {
        assert_abs_diff_eq!(sin(x + 2.0 * PI), sin(x), epsilon = 2e-6);
    }
}

#[test]
fn tan_periodic() {
    for x in grid(-1.2, 1.2, 481) {
        assert_relative_eq!(tan(x + PI), tan(x), max_relative = 2e-5, epsilon = 1e-6);
    }
}

#[test]
fn asin_acos_complement() {
    for x in grid(-1.0, 1.0, 2000) {
        assert_abs_diff_eq!(asin(x) + acos(x), FRAC_PI_2, epsilon = 1e-6);
    }
}

#[test]
fn sin_asin_round_trip() {
    for x in grid(-1.5, 1.5, 300) {
        assert_abs_diff_eq!(asin(sin(x)), x, epsilon = 2e-5);
    }
}

#[test]
fn atan2_scenarios() {
    assert_abs_diff_eq!(atan2(1.0, 1.0), FRAC_PI_4, epsilon = 1e-6);
    assert_eq!(atan2(0.0, -1.0), PI);
    assert_eq!(atan2(f32::INFINITY, f32::INFINITY), FRAC_PI_4);
    assert!(atan2(f32::NAN, 1.0).is_nan());
}

#[test]
fn atan2_recovers_angle() {
    for a in grid(-3.0, 3.0, 120) {
        let (s, c) = sin_cos(a);
        assert_abs_diff_eq!(atan2(s, c), a, epsilon = 2e-6);
    }
}

// ============================================================================
// Exponentials
// ============================================================================

#[test]
fn exp_log_inverse_near_unity() {
    for x in grid(0.1, 10.0, 1999) {
        assert_relative_eq!(exp(log(x)), x, max_relative = 2e-6);
    }
}

#[test]
fn exp_log_inverse_wide() {
    let mut x = 1.0e-30f32;
    while x < 1.0e30 {
        assert_relative_eq!(exp(log(x)), x, max_relative = 2e-3);
        x *= 3.7;
    }
}

#[test]
fn log_exp_inverse() {
    for x in grid(-80.0, 80.0, 1601) {
        assert_abs_diff_eq!(log(exp(x)), x, epsilon = 3e-3);
    }
}

#[test]
fn pow_scenarios() {
    for x in [f32::NAN, f32::INFINITY, -2.0, 0.0, 5.0] {
        assert_eq!(pow(x, 0.0), 1.0);
    }
    for y in [f32::NAN, f32::NEG_INFINITY, -1.0, 0.5, 3.0] {
        assert_eq!(pow(1.0, y), 1.0);
    }
    assert_eq!(pow(7.5, 1.0), 7.5);
    assert_eq!(pow(0.0, -1.0), f32::INFINITY);
    assert_eq!(pow(-0.0, -1.0), f32::NEG_INFINITY);
    assert_relative_eq!(pow(-2.0, 3.0), -8.0, max_relative = 1e-6);
    assert!(pow(-2.0, 0.5).is_nan());
}

#[test]
fn pow_matches_exp_log() {
    for x in grid(0.5, 4.0, 35) {
        for y in grid(-3.0, 3.0, 23) {
            assert_relative_eq!(pow(x, y), x.powf(y), max_relative = 1e-5);
        }
    }
}

// ============================================================================
// Square root and classification
// ============================================================================

#[test]
fn sqrt_scenarios() {
    assert_eq!(sqrt(4.0), 2.0);
    assert!(sqrt(-1.0).is_nan());
    assert_eq!(sqrt(f32::INFINITY), f32::INFINITY);
    let mut x = 1.0e-30f32;
    while x < 1.0e30 {
        let r = sqrt(x);
        assert_relative_eq!(r * r, x, max_relative = 1e-6);
        x *= 2.9;
    }
}

#[test]
fn classification_scenarios() {
    assert!(is_nan(nan()));
    assert!(is_inf(f32::INFINITY, 1));
    assert!(!is_inf(f32::INFINITY, -1));
    assert!(signbit(-0.0));
}

// ============================================================================
// Backend parity
// ============================================================================

#[test]
fn native_backend_matches_portable() {
    use math32::backend::{Native, Portable, Primitives};

    for x in grid(-300.0, 300.0, 4801) {
        assert_eq!(Native::floor(x).to_bits(), Portable::floor(x).to_bits(), "floor({})", x);
        assert_eq!(Native::ceil(x).to_bits(), Portable::ceil(x).to_bits(), "ceil({})", x);
        assert_eq!(Native::round(x).to_bits(), Portable::round(x).to_bits(), "round({})", x);
        if x > 0.0 {
            assert_eq!(Native::sqrt(x).to_bits(), Portable::sqrt(x).to_bits(), "sqrt({})", x);
        }
    }
}

#[test]
fn vector_scenarios() {
    assert_eq!(dot3([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]), 32.0);
    assert_eq!(cross3([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
    println!("backend: {}", math32::backend::NAME);
}
