//! # math32
//!
//! Single-precision math kernels for rendering and image code.
//!
//! Every function takes and returns `f32` and computes in `f32`:
//!
//! - [`is_nan`], [`is_inf`], [`signbit`], [`nan`] - IEEE-754 bit classification
//! - [`floor`], [`ceil`], [`round`], [`trunc`] - rounding to integers
//! - [`min`], [`max`] - NaN-propagating minimum and maximum
//! - [`sqrt`] - square root
//! - [`sin`], [`cos`], [`tan`], [`sin_cos`] - trigonometry
//! - [`asin`], [`acos`], [`atan`], [`atan2`] - inverse trigonometry
//! - [`exp`], [`ldexp`], [`log`], [`pow`] - exponentials and logarithms
//! - [`dot3`], [`cross3`], [`mat3_mul_vec3`] - 3-vector primitives
//!
//! ## Error Convention
//!
//! Nothing here returns `Result` or panics. An argument outside a
//! function's domain yields NaN, a signed infinity or a signed zero, as
//! listed in each function's documentation:
//!
//! ```rust
//! use math32::{log, sqrt, pow};
//!
//! assert!(sqrt(-1.0).is_nan());
//! assert_eq!(log(0.0), f32::NEG_INFINITY);
//! assert_eq!(pow(0.0, -1.0), f32::INFINITY);
//! ```
//!
//! ## Backends
//!
//! Square root, rounding, min/max and the 3-vector primitives go through
//! [`backend::Native`], picked when the crate is compiled:
//!
//! ```text
//! x86_64   -> SQRTSS / MAXSS / MINSS, ROUNDSS with +sse4.1
//! aarch64  -> FSQRT / FRINT* / FMAX / FMIN
//! other    -> portable f64-widening fallback
//! ```
//!
//! The transcendentals are the same polynomial code on every target.
//!
//! ## Feature Flags
//!
//! - `portable` - use the portable backend even where a native one exists

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::excessive_precision)]

pub mod backend;
pub mod bits;

mod asin;
mod atan;
mod exp;
mod log;
mod minmax;
mod pow;
mod round;
mod sqrt;
mod trig;

pub use asin::{acos, asin};
pub use atan::{atan, atan2};
pub use bits::{abs, copysign, inf, is_inf, is_nan, nan, signbit};
pub use exp::{exp, ldexp};
pub use log::log;
pub use minmax::{max, min};
pub use pow::pow;
pub use round::{ceil, floor, round, trunc};
pub use sqrt::sqrt;
pub use trig::{cos, sin, sin_cos, tan};

use backend::{Native, Primitives};

/// Dot product of two 3-vectors.
///
/// # Example
///
/// ```rust
/// assert_eq!(math32::dot3([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]), 32.0);
/// ```
#[inline]
pub fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    Native::dot3(a, b)
}

/// Right-handed cross product `a × b`.
#[inline]
pub fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    Native::cross3(a, b)
}

/// Multiplies a row-major 3x3 matrix by a column vector.
///
/// `m[0..3]` is the first row, so each output component is the dot
/// product of one row with `v`.
///
/// ```rust
/// let m = [0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
/// assert_eq!(math32::mat3_mul_vec3(&m, [1.0, 2.0, 3.0]), [2.0, 1.0, 3.0]);
/// ```
#[inline]
pub fn mat3_mul_vec3(m: &[f32; 9], v: [f32; 3]) -> [f32; 3] {
    Native::mat3_mul_vec3(m, v)
}
