//! 3-component vector.
//!
//! [`Vec3`] is a plain `Copy` value. Every operation returns a new vector
//! except [`Vec3::make_unit`], which normalizes in place.
//!
//! # Usage
//!
//! ```rust
//! use math32_vec::Vec3;
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(4.0, 5.0, 6.0);
//! assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
//! assert_eq!(a.dot(b), 32.0);
//! ```

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector of `f32`.
///
/// Access via `.x`, `.y`, `.z` or index `[0]`, `[1]`, `[2]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product, through the active [`math32::backend`].
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        math32::dot3(self.to_array(), other.to_array())
    }

    /// Right-handed cross product.
    ///
    /// ```rust
    /// use math32_vec::Vec3;
    ///
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::from_array(math32::cross3(self.to_array(), other.to_array()))
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        math32::sqrt(self.squared_length())
    }

    /// Squared length (no square root).
    #[inline]
    pub fn squared_length(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// This vector divided by its length.
    ///
    /// There is no zero check: a zero vector yields NaN components. Use
    /// [`Vec3::de_nan`] afterwards if the input may be degenerate.
    #[inline]
    pub fn unit_vector(self) -> Self {
        self / self.length()
    }

    /// Normalizes this vector in place. Same caveat as [`Vec3::unit_vector`].
    #[inline]
    pub fn make_unit(&mut self) {
        *self = self.unit_vector();
    }

    /// Linear interpolation `(1-t)·self + t·other`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }

    /// Component-wise minimum of three vectors.
    ///
    /// Each component starts from `f32::MAX` and takes any smaller input,
    /// so NaN components are ignored. Used for bounding boxes of
    /// triangles.
    pub fn min3(a: Self, b: Self, c: Self) -> Self {
        let pick = |p: f32, q: f32, r: f32| {
            [p, q, r].into_iter().fold(f32::MAX, |m, v| if v < m { v } else { m })
        };
        Self::new(pick(a.x, b.x, c.x), pick(a.y, b.y, c.y), pick(a.z, b.z, c.z))
    }

    /// Component-wise maximum of three vectors, starting from `-f32::MAX`.
    pub fn max3(a: Self, b: Self, c: Self) -> Self {
        let pick = |p: f32, q: f32, r: f32| {
            [p, q, r].into_iter().fold(-f32::MAX, |m, v| if v > m { v } else { m })
        };
        Self::new(pick(a.x, b.x, c.x), pick(a.y, b.y, c.y), pick(a.z, b.z, c.z))
    }

    /// Replaces NaN and infinite components with zero.
    ///
    /// Keeps a single bad Monte Carlo sample from poisoning an accumulator.
    #[inline]
    pub fn de_nan(self) -> Self {
        let clean = |v: f32| {
            if math32::is_nan(v) || math32::is_inf(v, 0) {
                0.0
            } else {
                v
            }
        };
        Self::new(clean(self.x), clean(self.y), clean(self.z))
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// Indexing
impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Vec3 * Vec3 (component-wise)
impl Mul for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

// Vec3 / Vec3 (component-wise)
impl Div for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Sum for Vec3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Vec3> for Vec3 {
    fn sum<I: Iterator<Item = &'a Vec3>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> [f32; 3] {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(b / a, Vec3::new(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vec3_assign_ops() {
        let mut v = Vec3::ONE;
        v += Vec3::X;
        v -= Vec3::Z;
        v *= 3.0;
        assert_eq!(v, Vec3::new(6.0, 3.0, 0.0));
    }

    #[test]
    fn test_vec3_dot_cross() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
        assert_eq!(a.cross(b), Vec3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_vec3_length() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(v.squared_length(), 169.0);
        assert_eq!(v.length(), 13.0);
    }

    #[test]
    fn test_vec3_unit() {
        let v = Vec3::new(0.0, 3.0, 4.0).unit_vector();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, 0.6, epsilon = 1e-6);

        let mut w = Vec3::new(10.0, 0.0, 0.0);
        w.make_unit();
        assert_eq!(w, Vec3::X);
    }

    #[test]
    fn test_vec3_unit_of_zero_is_nan() {
        let v = Vec3::ZERO.unit_vector();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
        assert_eq!(v.de_nan(), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_lerp() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 4.0, 8.0);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        // unclamped
        assert_eq!(a.lerp(b, 2.0), Vec3::new(4.0, 8.0, 16.0));
    }

    #[test]
    fn test_vec3_min3_max3() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(-1.0, 5.0, 0.5);
        let c = Vec3::new(0.0, 0.0, 9.0);
        assert_eq!(Vec3::min3(a, b, c), Vec3::new(-1.0, -2.0, 0.5));
        assert_eq!(Vec3::max3(a, b, c), Vec3::new(1.0, 5.0, 9.0));
    }

    #[test]
    fn test_vec3_min3_skips_nan() {
        let n = Vec3::splat(f32::NAN);
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Vec3::min3(n, a, n), a);
        assert_eq!(Vec3::max3(n, n, a), a);
        assert_eq!(Vec3::min3(n, n, n), Vec3::splat(f32::MAX));
        assert_eq!(Vec3::max3(n, n, n), Vec3::splat(-f32::MAX));
    }

    #[test]
    fn test_vec3_de_nan() {
        let v = Vec3::new(f32::NAN, f32::INFINITY, 2.0).de_nan();
        assert_eq!(v, Vec3::new(0.0, 0.0, 2.0));
        assert!(v.is_finite());
        assert!(!Vec3::new(f32::NEG_INFINITY, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_vec3_sum() {
        let vs = [Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE];
        let total: Vec3 = vs.iter().sum();
        assert_eq!(total, Vec3::splat(2.0));
        let owned: Vec3 = vs.into_iter().sum();
        assert_eq!(owned, total);
    }

    #[test]
    fn test_vec3_index_and_conversions() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);

        let arr: [f32; 3] = v.into();
        assert_eq!(Vec3::from(arr), v);
        let g: glam::Vec3 = v.into();
        assert_eq!(g.y, 7.0);
        assert_eq!(Vec3::from(g), v);
    }
}
