use std::ops::Mul;

use crate::{Vec2, Vec3};

/// Column-major 3×3 matrix of `f64`.
///
/// Only the operations needed for planar projective geometry are provided:
/// composition, inversion and application to homogeneous points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub cols: [Vec3<f64>; 3],
}

const SINGULAR_EPSILON: f64 = 1e-12;

impl Mat3 {
    pub const fn from_cols(c0: Vec3<f64>, c1: Vec3<f64>, c2: Vec3<f64>) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Build from row-major coefficients `[a, b, c, d, e, f, g, h, i]`.
    pub const fn from_rows(m: [f64; 9]) -> Self {
        Self::from_cols(
            Vec3::new(m[0], m[3], m[6]),
            Vec3::new(m[1], m[4], m[7]),
            Vec3::new(m[2], m[5], m[8]),
        )
    }

    pub const fn identity() -> Self {
        Self::from_rows([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Row-major coefficients, the inverse of [`Mat3::from_rows`].
    pub fn to_rows(self) -> [f64; 9] {
        let [c0, c1, c2] = self.cols;
        [c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z]
    }

    pub fn transpose(self) -> Self {
        let [c0, c1, c2] = self.cols;
        Self::from_cols(
            Vec3::new(c0.x, c1.x, c2.x),
            Vec3::new(c0.y, c1.y, c2.y),
            Vec3::new(c0.z, c1.z, c2.z),
        )
    }

    pub fn determinant(self) -> f64 {
        let [c0, c1, c2] = self.cols;
        c0.x * (c1.y * c2.z - c1.z * c2.y) - c1.x * (c0.y * c2.z - c0.z * c2.y)
            + c2.x * (c0.y * c1.z - c0.z * c1.y)
    }

    /// Inverse via the adjugate, `None` when the matrix is (numerically) singular.
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let [c0, c1, c2] = self.cols;
        // rows of the adjugate are cross products of column pairs
        let adjugate = Self::from_cols(
            Vec3::new(
                c1.y * c2.z - c1.z * c2.y,
                c1.z * c2.x - c1.x * c2.z,
                c1.x * c2.y - c1.y * c2.x,
            ),
            Vec3::new(
                c2.y * c0.z - c2.z * c0.y,
                c2.z * c0.x - c2.x * c0.z,
                c2.x * c0.y - c2.y * c0.x,
            ),
            Vec3::new(
                c0.y * c1.z - c0.z * c1.y,
                c0.z * c1.x - c0.x * c1.z,
                c0.x * c1.y - c0.y * c1.x,
            ),
        )
        .transpose();
        Some(adjugate * (1.0 / det))
    }

    /// Apply to the point `(x, y, 1)` and dehomogenise.
    ///
    /// Returns `None` for points that map onto the line at infinity.
    pub fn project(self, point: Vec2<f64>) -> Option<Vec2<f64>> {
        let h = self * Vec3::new(point.x, point.y, 1.0);
        if h.z.abs() < SINGULAR_EPSILON {
            return None;
        }
        Some(Vec2::new(h.x / h.z, h.y / h.z))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<f64> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self {
            cols: [self.cols[0] * rhs, self.cols[1] * rhs, self.cols[2] * rhs],
        }
    }
}

impl Mul<Vec3<f64>> for Mat3 {
    type Output = Vec3<f64>;
    fn mul(self, v: Vec3<f64>) -> Vec3<f64> {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Mat3) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}
