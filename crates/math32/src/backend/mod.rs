//! Platform dispatch for hardware-accelerated primitives.
//!
//! Every primitive the kernel can hand to a single CPU instruction is part
//! of the [`Primitives`] trait. [`Portable`] is the reference
//! implementation; architecture backends override it where the target has
//! a matching instruction.
//!
//! The choice is made once, at build time, through the [`Native`] alias:
//!
//! | Target | `Native` |
//! |--------|----------|
//! | `x86_64` | [`x86::Sse`] (SSE, SSE4.1 rounding when enabled) |
//! | `aarch64` | [`aarch64::Neon`] |
//! | anything else, or feature `portable` | [`Portable`] |
//!
//! Callers never branch on the backend; the public functions in the crate
//! root call `Native::...` directly and the compiler inlines through it.
//!
//! Special values (NaN, infinities, signed zeros) are filtered by the
//! public wrappers before reaching a backend, so implementations only see
//! finite, nonzero arguments for the scalar operations.

mod portable;

#[cfg(target_arch = "x86_64")]
pub mod x86;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

pub use portable::Portable;

/// Primitive operations with per-architecture implementations.
///
/// All methods are associated functions: a backend is a zero-sized marker
/// type, so dispatch costs nothing at run time.
pub trait Primitives {
    /// Human-readable backend name, for logs and benchmark labels.
    const NAME: &'static str;

    /// Square root of a finite positive value.
    fn sqrt(x: f32) -> f32;

    /// Round toward negative infinity.
    fn floor(x: f32) -> f32;

    /// Round toward positive infinity.
    fn ceil(x: f32) -> f32;

    /// Round to nearest, ties away from zero.
    fn round(x: f32) -> f32;

    /// Round toward zero.
    fn trunc(x: f32) -> f32;

    /// Larger of two non-NaN values. Signed-zero ties are unspecified.
    fn max(x: f32, y: f32) -> f32;

    /// Smaller of two non-NaN values. Signed-zero ties are unspecified.
    fn min(x: f32, y: f32) -> f32;

    /// Dot product of two 3-vectors.
    fn dot3(a: [f32; 3], b: [f32; 3]) -> f32;

    /// Right-handed cross product of two 3-vectors.
    fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3];

    /// Row-major 3x3 matrix times column vector.
    fn mat3_mul_vec3(m: &[f32; 9], v: [f32; 3]) -> [f32; 3];
}

/// Backend selected for this build.
#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
pub type Native = x86::Sse;

/// Backend selected for this build.
#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
pub type Native = aarch64::Neon;

/// Backend selected for this build.
#[cfg(any(
    feature = "portable",
    not(any(target_arch = "x86_64", target_arch = "aarch64"))
))]
pub type Native = Portable;

/// Name of the backend selected for this build.
///
/// ```rust
/// println!("math32 backend: {}", math32::backend::NAME);
/// ```
pub const NAME: &str = <Native as Primitives>::NAME;

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [f32; 14] = [
        0.3, 0.5, 0.7, 1.0, 1.5, 2.5, 3.5, 7.49, 123.456, 1.0e-3, 8388607.5, 1.0e7, 3.0e38, 1.0e-40,
    ];

    #[test]
    fn test_native_matches_portable_rounding() {
        for &g in &GRID {
            for x in [g, -g] {
                assert_eq!(Native::floor(x).to_bits(), Portable::floor(x).to_bits(), "floor({})", x);
                assert_eq!(Native::ceil(x).to_bits(), Portable::ceil(x).to_bits(), "ceil({})", x);
                assert_eq!(Native::round(x).to_bits(), Portable::round(x).to_bits(), "round({})", x);
                assert_eq!(Native::trunc(x).to_bits(), Portable::trunc(x).to_bits(), "trunc({})", x);
            }
        }
    }

    #[test]
    fn test_native_matches_portable_sqrt() {
        for &x in &GRID {
            assert_eq!(Native::sqrt(x).to_bits(), Portable::sqrt(x).to_bits(), "sqrt({})", x);
        }
    }

    #[test]
    fn test_native_matches_portable_minmax() {
        for &a in &GRID {
            for &b in &GRID {
                assert_eq!(Native::max(a, -b), Portable::max(a, -b));
                assert_eq!(Native::min(a, -b), Portable::min(a, -b));
            }
        }
    }

    #[test]
    fn test_native_vector_ops() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        assert_eq!(Native::dot3(a, b), 32.0);
        assert_eq!(Native::cross3([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(Native::cross3(a, b), Portable::cross3(a, b));

        let m = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_eq!(Native::mat3_mul_vec3(&m, [1.0, 0.0, -1.0]), [-2.0, -2.0, -2.0]);
    }

    #[test]
    fn test_name_is_set() {
        assert!(!NAME.is_empty());
    }
}
