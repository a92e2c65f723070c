//! Direction sampling for Monte Carlo integration.
//!
//! Each sampler comes in two forms: a pure function of two uniform draws
//! `r1, r2 ∈ [0, 1)`, and a `random_*` wrapper that takes them from any
//! [`UniformSource`]. Directions are in local space with `+Z` as the
//! pole; rotate them with [`Onb::local`](crate::Onb::local).

use crate::Vec3;
use math32_rand::UniformSource;
use std::f32::consts::TAU;

/// Cosine-weighted direction on the `+Z` hemisphere.
///
/// ```text
/// z   = √(1 - r2)
/// φ   = 2π·r1
/// x,y = (cos φ, sin φ)·√r2
/// ```
///
/// The result has unit length and pdf `cos θ / π`.
pub fn cosine_direction(r1: f32, r2: f32) -> Vec3 {
    let z = math32::sqrt(1.0 - r2);
    let (s, c) = math32::sin_cos(TAU * r1);
    let r = math32::sqrt(r2);
    Vec3::new(c * r, s * r, z)
}

/// Direction toward a sphere of `radius` whose center lies along `+Z` at
/// squared distance `distance_squared`, uniform over the subtended cone.
///
/// ```text
/// cos θmax = √(1 - radius²/distance²)
/// z        = 1 + r2·(cos θmax - 1)
/// φ        = 2π·r1
/// ```
///
/// A point inside the sphere (`radius² > distance²`) yields NaN
/// components.
pub fn to_sphere(radius: f32, distance_squared: f32, r1: f32, r2: f32) -> Vec3 {
    let cos_max = math32::sqrt(1.0 - radius * radius / distance_squared);
    let z = 1.0 + r2 * (cos_max - 1.0);
    let (s, c) = math32::sin_cos(TAU * r1);
    let r = math32::sqrt(1.0 - z * z);
    Vec3::new(c * r, s * r, z)
}

/// [`cosine_direction`] with two draws from `rng`.
pub fn random_cosine_direction<R: UniformSource + ?Sized>(rng: &mut R) -> Vec3 {
    let r1 = rng.next_f32();
    let r2 = rng.next_f32();
    cosine_direction(r1, r2)
}

/// [`to_sphere`] with two draws from `rng`.
pub fn random_to_sphere<R: UniformSource + ?Sized>(
    radius: f32,
    distance_squared: f32,
    rng: &mut R,
) -> Vec3 {
    let r1 = rng.next_f32();
    let r2 = rng.next_f32();
    to_sphere(radius, distance_squared, r1, r2)
}
