//! Vector and matrix math for 2D rendering

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// 2D Vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn normalize(self) -> Vec2 {
        let l = self.len();
        if l == 0.0 {
            return Vec2::ZERO;
        }
        Vec2 {
            x: self.x / l,
            y: self.y / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec2 {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Unit vector perpendicular to this one, `(-y, x)` normalized.
    /// Zero input gives zero output.
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x).normalize()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, s: f32) -> Vec2 {
        self.scale(s)
    }
}

/// Determinants smaller than this are treated as singular.
const DET_EPSILON: f32 = 1e-12;

/// 3x3 affine matrix, row-major, column-vector convention:
/// `transform_point` computes `M * [x, y, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Mat3 {
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Translation by (tx, ty)
    pub fn translation(tx: f32, ty: f32) -> Self {
        let mut out = Mat3::IDENTITY;
        out.m[0][2] = tx;
        out.m[1][2] = ty;
        out
    }

    /// Uniform scale by s
    pub fn scaling(s: f32) -> Self {
        let mut out = Mat3::IDENTITY;
        out.m[0][0] = s;
        out.m[1][1] = s;
        out
    }

    /// Matrix product `self * other`. Applied to a point, `other` acts first.
    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut out = [[0.0f32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Mat3 { m: out }
    }

    /// Apply to a 2D point (homogeneous w = 1)
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2 {
            x: self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            y: self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        }
    }

    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate. Returns None for singular or non-finite
    /// matrices, which is how a zero-scale transform surfaces downstream.
    pub fn inverse(&self) -> Option<Mat3> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < DET_EPSILON {
            return None;
        }

        let m = &self.m;
        let inv = Mat3 {
            m: [
                [
                    (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                    (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                    (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
                ],
                [
                    (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                    (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                    (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
                ],
                [
                    (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                    (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                    (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
                ],
            ],
        };
        Some(inv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_dot() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.dot(b) - 11.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_normalize_zero() {
        let v = Vec2::ZERO.normalize();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_vec2_perpendicular() {
        let p = Vec2::new(10.0, 0.0).perpendicular();
        assert!((p.x - 0.0).abs() < 0.001);
        assert!((p.y - 1.0).abs() < 0.001);
        // Perpendicular means zero dot product
        let v = Vec2::new(3.0, 4.0);
        assert!(v.perpendicular().dot(v).abs() < 0.001);
    }

    #[test]
    fn test_mat3_identity() {
        let p = Vec2::new(7.0, -3.0);
        let q = Mat3::IDENTITY.transform_point(p);
        assert!((q.x - 7.0).abs() < 0.001);
        assert!((q.y + 3.0).abs() < 0.001);
    }

    #[test]
    fn test_mat3_translation() {
        let q = Mat3::translation(5.0, -2.0).transform_point(Vec2::new(1.0, 1.0));
        assert!((q.x - 6.0).abs() < 0.001);
        assert!((q.y + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_mat3_scaling() {
        let q = Mat3::scaling(3.0).transform_point(Vec2::new(2.0, -1.0));
        assert!((q.x - 6.0).abs() < 0.001);
        assert!((q.y + 3.0).abs() < 0.001);
    }

    #[test]
    fn test_mat3_mul_applies_rhs_first() {
        // translate * scale: the point is scaled, then translated
        let m = Mat3::translation(10.0, 0.0).mul(&Mat3::scaling(2.0));
        let q = m.transform_point(Vec2::new(3.0, 4.0));
        assert!((q.x - 16.0).abs() < 0.001);
        assert!((q.y - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_mat3_mul_matches_sequential_transform() {
        let a = Mat3::translation(-4.0, 9.0);
        let b = Mat3::scaling(0.5);
        let p = Vec2::new(12.0, -7.0);
        let composed = a.mul(&b).transform_point(p);
        let sequential = a.transform_point(b.transform_point(p));
        assert!((composed.x - sequential.x).abs() < 0.001);
        assert!((composed.y - sequential.y).abs() < 0.001);
    }

    #[test]
    fn test_mat3_inverse_roundtrip() {
        let m = Mat3::translation(3.0, -8.0).mul(&Mat3::scaling(2.5));
        let inv = m.inverse().unwrap();
        let p = Vec2::new(1.5, 2.5);
        let q = inv.transform_point(m.transform_point(p));
        assert!((q.x - p.x).abs() < 0.001);
        assert!((q.y - p.y).abs() < 0.001);
    }

    #[test]
    fn test_mat3_inverse_singular() {
        assert!(Mat3::scaling(0.0).inverse().is_none());
    }

    #[test]
    fn test_mat3_determinant_of_scale() {
        let det = Mat3::scaling(2.0).determinant();
        assert!((det - 4.0).abs() < 0.001);
    }
}
