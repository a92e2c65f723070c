//! x86_64 backend.
//!
//! SSE is part of the x86_64 baseline, so `SQRTSS`, `MAXSS` and `MINSS`
//! are always available. `ROUNDSS` needs SSE4.1; without it (the default
//! `x86_64-unknown-linux-gnu` target) rounding falls through to the
//! portable implementation. Build with `-C target-feature=+sse4.1` or
//! `-C target-cpu=native` to get the instruction.
//!
//! The 3-vector operations use `wide::f32x4`, padding the fourth lane
//! with zero.

#[cfg_attr(target_feature = "sse4.1", allow(unused_imports))]
use super::Portable;
use super::Primitives;
use core::arch::x86_64::*;
use wide::f32x4;

/// SSE backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sse;

impl Primitives for Sse {
    #[cfg(target_feature = "sse4.1")]
    const NAME: &'static str = "x86_64-sse4.1";
    #[cfg(not(target_feature = "sse4.1"))]
    const NAME: &'static str = "x86_64-sse";

    #[inline]
    #[allow(unused_unsafe)]
    fn sqrt(x: f32) -> f32 {
        // SAFETY: SSE is always enabled on x86_64.
        unsafe { _mm_cvtss_f32(_mm_sqrt_ss(_mm_set_ss(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn floor(x: f32) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        {
            // SAFETY: guarded by the sse4.1 target feature.
            unsafe {
                let v = _mm_set_ss(x);
                _mm_cvtss_f32(_mm_floor_ss(v, v))
            }
        }
        #[cfg(not(target_feature = "sse4.1"))]
        {
            Portable::floor(x)
        }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn ceil(x: f32) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        {
            // SAFETY: guarded by the sse4.1 target feature.
            unsafe {
                let v = _mm_set_ss(x);
                _mm_cvtss_f32(_mm_ceil_ss(v, v))
            }
        }
        #[cfg(not(target_feature = "sse4.1"))]
        {
            Portable::ceil(x)
        }
    }

    #[inline]
    fn round(x: f32) -> f32 {
        // ROUNDSS has no ties-away mode: truncate, then step away from zero
        // when the discarded fraction is at least one half. `x - t` is exact.
        let t = Self::trunc(x);
        let frac = x - t;
        if frac >= 0.5 {
            t + 1.0
        } else if frac <= -0.5 {
            t - 1.0
        } else {
            t
        }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn trunc(x: f32) -> f32 {
        #[cfg(target_feature = "sse4.1")]
        {
            // SAFETY: guarded by the sse4.1 target feature.
            unsafe {
                let v = _mm_set_ss(x);
                _mm_cvtss_f32(_mm_round_ss::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(v, v))
            }
        }
        #[cfg(not(target_feature = "sse4.1"))]
        {
            Portable::trunc(x)
        }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn max(x: f32, y: f32) -> f32 {
        // MAXSS computes `x > y ? x : y`, same as the portable fallback.
        // SAFETY: SSE is always enabled on x86_64.
        unsafe { _mm_cvtss_f32(_mm_max_ss(_mm_set_ss(x), _mm_set_ss(y))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn min(x: f32, y: f32) -> f32 {
        // SAFETY: SSE is always enabled on x86_64.
        unsafe { _mm_cvtss_f32(_mm_min_ss(_mm_set_ss(x), _mm_set_ss(y))) }
    }

    #[inline]
    fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
        let va = f32x4::from([a[0], a[1], a[2], 0.0]);
        let vb = f32x4::from([b[0], b[1], b[2], 0.0]);
        (va * vb).reduce_add()
    }

    #[inline]
    fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        let a_yzx = f32x4::from([a[1], a[2], a[0], 0.0]);
        let a_zxy = f32x4::from([a[2], a[0], a[1], 0.0]);
        let b_yzx = f32x4::from([b[1], b[2], b[0], 0.0]);
        let b_zxy = f32x4::from([b[2], b[0], b[1], 0.0]);
        let r = (a_yzx * b_zxy - a_zxy * b_yzx).to_array();
        [r[0], r[1], r[2]]
    }

    #[inline]
    fn mat3_mul_vec3(m: &[f32; 9], v: [f32; 3]) -> [f32; 3] {
        let v4 = f32x4::from([v[0], v[1], v[2], 0.0]);
        let r0 = f32x4::from([m[0], m[1], m[2], 0.0]);
        let r1 = f32x4::from([m[3], m[4], m[5], 0.0]);
        let r2 = f32x4::from([m[6], m[7], m[8], 0.0]);
        [
            (r0 * v4).reduce_add(),
            (r1 * v4).reduce_add(),
            (r2 * v4).reduce_add(),
        ]
    }
}
