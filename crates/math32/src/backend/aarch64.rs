//! aarch64 backend.
//!
//! NEON is mandatory on aarch64. Scalars travel in lane 0 of a
//! `float32x2_t`: `FSQRT`, `FRINTM`/`FRINTP`/`FRINTA`/`FRINTZ` and
//! `FMAX`/`FMIN` each map to one instruction. `FRINTA` rounds ties away
//! from zero, which is exactly the `round` contract.

use super::Primitives;
use core::arch::aarch64::*;
use wide::f32x4;

/// NEON backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neon;

impl Primitives for Neon {
    const NAME: &'static str = "aarch64-neon";

    #[inline]
    #[allow(unused_unsafe)]
    fn sqrt(x: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vsqrt_f32(vdup_n_f32(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn floor(x: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vrndm_f32(vdup_n_f32(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn ceil(x: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vrndp_f32(vdup_n_f32(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn round(x: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vrnda_f32(vdup_n_f32(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn trunc(x: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vrnd_f32(vdup_n_f32(x))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn max(x: f32, y: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vmax_f32(vdup_n_f32(x), vdup_n_f32(y))) }
    }

    #[inline]
    #[allow(unused_unsafe)]
    fn min(x: f32, y: f32) -> f32 {
        // SAFETY: NEON is always enabled on aarch64.
        unsafe { vget_lane_f32::<0>(vmin_f32(vdup_n_f32(x), vdup_n_f32(y))) }
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
