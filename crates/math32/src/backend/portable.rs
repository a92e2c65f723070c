//! Reference backend for targets without a dedicated implementation.
//!
//! Rounding and square root widen to `f64`, use the `f64` routine and
//! narrow back. Every `f32` is exactly representable as `f64`, the rounding
//! functions return integers that narrow exactly, and an `f64` square root
//! narrowed to `f32` is correctly rounded, so the results match a native
//! single-precision instruction bit for bit.

use super::Primitives;

/// Portable scalar backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl Primitives for Portable {
    const NAME: &'static str = "portable";

    #[inline]
    fn sqrt(x: f32) -> f32 {
        (x as f64).sqrt() as f32
    }

    #[inline]
    fn floor(x: f32) -> f32 {
        (x as f64).floor() as f32
    }

    #[inline]
    fn ceil(x: f32) -> f32 {
        (x as f64).ceil() as f32
    }

    #[inline]
    fn round(x: f32) -> f32 {
        // f64::round rounds half away from zero.
        (x as f64).round() as f32
    }

    #[inline]
    fn trunc(x: f32) -> f32 {
        (x as f64).trunc() as f32
    }

    #[inline]
    fn max(x: f32, y: f32) -> f32 {
        if x > y { x } else { y }
    }

    #[inline]
    fn min(x: f32, y: f32) -> f32 {
        if x < y { x } else { y }
    }

    #[inline]
    fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[inline]
    fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[inline]
    fn mat3_mul_vec3(m: &[f32; 9], v: [f32; 3]) -> [f32; 3] {
        [
            m[0] * v[0] + m[1] * v[1] + m[2] * v[2],
            m[3] * v[0] + m[4] * v[1] + m[5] * v[2],
            m[6] * v[0] + m[7] * v[1] + m[8] * v[2],
        ]
    }
}
