//! # math32-vec
//!
//! Vector and matrix algebra for rendering code, built on the `math32`
//! kernels.
//!
//! - [`Vec3`] - 3D vectors: arithmetic, dot/cross, normalization, bounds
//! - [`Mat3`] - 3x3 row-major matrices and TBN frames
//! - [`Onb`] - orthonormal basis around a surface normal
//! - [`sample`] - cosine-weighted and cone direction sampling
//! - [`reflect`], [`refract`], [`schlick`] - surface optics
//!
//! # Design
//!
//! Matrices are **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Dot, cross and matrix-vector products call into [`math32`], so they
//! use the same per-architecture backend as the scalar kernels.
//!
//! # Usage
//!
//! ```rust
//! use math32_rand::{Seed, XorShift};
//! use math32_vec::{sample, Onb, Vec3};
//!
//! let mut rng = XorShift::with_seed(Seed::Fixed(1));
//! let normal = Vec3::new(0.0, 1.0, 0.0);
//! let dir = Onb::from_normal(normal).local(sample::random_cosine_direction(&mut rng));
//! assert!(dir.dot(normal) > 0.0);
//! ```
//!
//! # Dependencies
//!
//! - [`math32`] - scalar kernels and backend dispatch
//! - [`math32_rand`] - uniform draws for sampling
//! - [`glam`] - interop conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod onb;
mod optics;
pub mod sample;
mod vec3;

pub use mat3::*;
pub use onb::*;
pub use optics::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec3 as GlamVec3};
}
