//! 3x3 matrix for frame changes.
//!
//! # Convention
//!
//! Nine coefficients in **row-major** order, applied to **column vectors**:
//!
//! ```text
//! | m0 m1 m2 |   | x |   | m0*x + m1*y + m2*z |
//! | m3 m4 m5 | * | y | = | m3*x + m4*y + m5*z |
//! | m6 m7 m8 |   | z |   | m6*x + m7*y + m8*z |
//! ```
//!
//! The only arithmetic is matrix-vector multiply, which goes through
//! [`math32::mat3_mul_vec3`] and therefore the active backend.
//!
//! # Usage
//!
//! ```rust
//! use math32_vec::{Mat3, Vec3};
//!
//! // tangent space with the normal along +Y
//! let tbn = Mat3::tbn(Vec3::X, Vec3::Z, Vec3::Y);
//! assert_eq!(tbn * Vec3::new(0.0, 0.0, 1.0), Vec3::Y);
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 matrix, row-major.
///
/// # Example
///
/// ```rust
/// use math32_vec::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Coefficients, row-major: `[m00, m01, m02, m10, ..., m22]`
    pub m: [f32; 9],
}

impl Mat3 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 9] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Creates a matrix from its nine row-major coefficients.
    #[inline]
    pub const fn from_array(m: [f32; 9]) -> Self {
        Self { m }
    }

    /// Creates a matrix from row arrays.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math32_vec::Mat3;
    ///
    /// let m = Mat3::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Mat3::IDENTITY);
    /// ```
    #[inline]
    pub const fn from_rows(r: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                r[0][0], r[0][1], r[0][2], //
                r[1][0], r[1][1], r[1][2], //
                r[2][0], r[2][1], r[2][2],
            ],
        }
    }

    /// Creates a matrix from column arrays.
    #[inline]
    pub const fn from_cols(c: [[f32; 3]; 3]) -> Self {
        Self {
            m: [
                c[0][0], c[1][0], c[2][0], //
                c[0][1], c[1][1], c[2][1], //
                c[0][2], c[1][2], c[2][2],
            ],
        }
    }

    /// Tangent-bitangent-normal frame: `t`, `b` and `n` become the columns.
    ///
    /// Multiplying a tangent-space vector by the result expresses it in
    /// the space `t`, `b`, `n` were given in.
    #[inline]
    pub fn tbn(t: Vec3, b: Vec3, n: Vec3) -> Self {
        Self::from_cols([t.to_array(), b.to_array(), n.to_array()])
    }

    /// Returns the coefficients.
    #[inline]
    pub const fn to_array(&self) -> [f32; 9] {
        self.m
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[3 * i], self.m[3 * i + 1], self.m[3 * i + 2])
    }

    /// Returns a column as Vec3.
    #[inline]
    pub fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[i], self.m[3 + i], self.m[6 + i])
    }

    /// Returns the transpose. For an orthonormal frame this is the inverse.
    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::from_array([m[0], m[3], m[6], m[1], m[4], m[7], m[2], m[5], m[8]])
    }

    /// Matrix times column vector.
    #[inline]
    pub fn mul_vec3(&self, v: Vec3) -> Vec3 {
        Vec3::from_array(math32::mat3_mul_vec3(&self.m, v.to_array()))
    }

    /// Converts to glam Mat3 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols_array(&self.transpose().m)
    }

    /// Creates from glam Mat3.
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_array(m.to_cols_array()).transpose()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

impl Mul<Vec3> for &Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.mul_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mat3_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
    }

    #[test]
    fn test_mat3_rows_cols() {
        let rows = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let cols = Mat3::from_cols([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
        assert_eq!(rows, cols);
        assert_eq!(rows.row(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(rows.col(1), Vec3::new(2.0, 5.0, 8.0));
        assert_eq!(rows.transpose().row(0), Vec3::new(1.0, 4.0, 7.0));
    }

    #[test]
    fn test_mat3_mul_vec3() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m * Vec3::new(1.0, 0.0, -1.0), Vec3::new(-2.0, -2.0, -2.0));
        assert_eq!(&m * Vec3::Y, Vec3::new(2.0, 5.0, 8.0));
    }

    #[test]
    fn test_mat3_tbn_maps_axes_to_columns() {
        let t = Vec3::new(0.0, 0.0, -1.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let n = Vec3::new(1.0, 0.0, 0.0);
        let m = Mat3::tbn(t, b, n);
        assert_eq!(m * Vec3::X, t);
        assert_eq!(m * Vec3::Y, b);
        assert_eq!(m * Vec3::Z, n);
        // orthonormal: transpose undoes it
        assert_eq!(m.transpose() * n, Vec3::Z);
    }

    #[test]
    fn test_mat3_glam_round_trip() {
        let m = Mat3::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let g = m.to_glam();
        // glam stores columns; first column is (1, 4, 7)
        assert_eq!(g.x_axis, glam::Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(Mat3::from_glam(g), m);

        let v = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(Vec3::from(g * v.to_glam()), m * v);
    }
}
