//! Reflection and refraction at a surface.

use crate::Vec3;

/// Mirror reflection of `v` about the normal `n`: `v - 2(v·n)n`.
///
/// `n` must be unit length.
///
/// ```rust
/// use math32_vec::{reflect, Vec3};
///
/// let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
/// assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
/// ```
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}

/// Refraction of `v` through a surface with unit normal `n` (Snell's law).
///
/// `ni_over_nt` is the ratio of refractive indices, incident over
/// transmitted. Returns `None` on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.unit_vector();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some((uv - n * dt) * ni_over_nt - n * math32::sqrt(discriminant))
    } else {
        None
    }
}

/// Schlick's approximation of Fresnel reflectance.
///
/// ```text
/// r0 = ((1 - n) / (1 + n))²
/// R  = r0 + (1 - r0)·(1 - cos θ)⁵
/// ```
#[inline]
pub fn schlick(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = (1.0 - ref_idx) / (1.0 + ref_idx);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * math32::pow(1.0 - cosine, 5.0)
}
