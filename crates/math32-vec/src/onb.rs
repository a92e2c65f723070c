//! Orthonormal basis around a surface normal.

use crate::{Mat3, Vec3};

/// Below this squared length the `(n.y, -n.x, 0)` tangent is unusable.
const DEGENERATE_TANGENT: f32 = 0.01;

/// An orthonormal frame `(u, v, w)` with `w` along a surface normal.
///
/// Scatter directions are sampled around `+Z` in local space, then
/// [`Onb::local`] rotates them into the frame.
///
/// # Example
///
/// ```rust
/// use math32_vec::{Onb, Vec3};
///
/// let onb = Onb::from_normal(Vec3::Y);
/// let world = onb.local(Vec3::Z);
/// assert!((world - Vec3::Y).length() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    /// Tangent
    pub u: Vec3,
    /// Bitangent
    pub v: Vec3,
    /// Normal
    pub w: Vec3,
}

impl Onb {
    /// Builds a frame around `n`, which need not be normalized.
    ///
    /// The tangent is `(n.y, -n.x, 0)`, falling back to `+X` when `n` is
    /// close to the Z axis. The bitangent is `w × u`.
    pub fn from_normal(n: Vec3) -> Self {
        let w = n.unit_vector();
        let mut u = Vec3::new(w.y, -w.x, 0.0);
        if u.squared_length() < DEGENERATE_TANGENT {
            u = Vec3::X;
        }
        // the fallback is not perpendicular to w in general
        let u = (u - w * w.dot(u)).unit_vector();
        let v = w.cross(u);
        Self { u, v, w }
    }

    /// The frame as a TBN matrix (columns `u`, `v`, `w`).
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::tbn(self.u, self.v, self.w)
    }

    /// Maps a local-space vector (`+Z` along the normal) into the frame.
    #[inline]
    pub fn local(&self, a: Vec3) -> Vec3 {
        self.to_mat3() * a
    }

    /// Maps a vector back into local space.
    #[inline]
    pub fn to_local(&self, a: Vec3) -> Vec3 {
        Vec3::new(a.dot(self.u), a.dot(self.v), a.dot(self.w))
    }
}
