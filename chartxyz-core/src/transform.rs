//! 3D affine transformation utilities
//!
//! [`Transform3D`] wraps a homogeneous 4x4 matrix. Composition follows the
//! usual column-vector convention: in `a * b`, `b` is applied to a point
//! first. The in-place builders come in two flavours:
//!
//! - `concatenate`, `translate`, `rotate_*`, `scale` right-multiply, so the new
//!   operation acts *before* everything already accumulated;
//! - `post_concatenate`, `post_translate`, `post_scale` left-multiply, so the new
//!   operation acts *after* everything already accumulated.

use crate::point::{Point3d, Vector3d};
use nalgebra::{Matrix4, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D transformation that can be applied to points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    pub matrix: Matrix4<f64>,
}

impl Transform3D {
    /// Create an identity transformation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation
    pub fn translation(translation: Vector3d) -> Self {
        Self {
            matrix: Matrix4::new_translation(&translation),
        }
    }

    /// Create a per-axis scaling transformation
    pub fn scaling(scale: Vector3d) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&scale),
        }
    }

    /// Create a uniform scaling transformation
    pub fn uniform_scaling(scale: f64) -> Self {
        Self::scaling(Vector3::repeat(scale))
    }

    /// Rotation about the x axis, in degrees
    pub fn rotation_x(degrees: f64) -> Self {
        Self::axis_rotation(Vector3::x_axis(), degrees)
    }

    /// Rotation about the y axis, in degrees
    pub fn rotation_y(degrees: f64) -> Self {
        Self::axis_rotation(Vector3::y_axis(), degrees)
    }

    /// Rotation about the z axis, in degrees
    pub fn rotation_z(degrees: f64) -> Self {
        Self::axis_rotation(Vector3::z_axis(), degrees)
    }

    fn axis_rotation(axis: nalgebra::Unit<Vector3d>, degrees: f64) -> Self {
        Self {
            matrix: Rotation3::from_axis_angle(&axis, degrees.to_radians()).to_homogeneous(),
        }
    }

    /// Reset to identity
    pub fn set_identity(&mut self) {
        self.matrix = Matrix4::identity();
    }

    /// `self = self * other`: `other` acts first
    pub fn concatenate(&mut self, other: &Transform3D) {
        self.matrix *= other.matrix;
    }

    /// `self = other * self`: `other` acts last
    pub fn post_concatenate(&mut self, other: &Transform3D) {
        self.matrix = other.matrix * self.matrix;
    }

    pub fn translate(&mut self, offset: Vector3d) {
        self.concatenate(&Self::translation(offset));
    }

    pub fn post_translate(&mut self, offset: Vector3d) {
        self.post_concatenate(&Self::translation(offset));
    }

    pub fn scale(&mut self, factors: Vector3d) {
        self.concatenate(&Self::scaling(factors));
    }

    pub fn post_scale(&mut self, factors: Vector3d) {
        self.post_concatenate(&Self::scaling(factors));
    }

    pub fn rotate_x(&mut self, degrees: f64) {
        self.concatenate(&Self::rotation_x(degrees));
    }

    pub fn rotate_y(&mut self, degrees: f64) {
        self.concatenate(&Self::rotation_y(degrees));
    }

    pub fn rotate_z(&mut self, degrees: f64) {
        self.concatenate(&Self::rotation_z(degrees));
    }

    /// Apply the transformation to a point
    pub fn transform_point(&self, point: &Point3d) -> Point3d {
        let homogeneous = self.matrix * point.to_homogeneous();
        Point3d::from_homogeneous(homogeneous).unwrap_or(*point)
    }

    /// Apply the linear part of the transformation to a vector
    pub fn transform_vector(&self, vector: &Vector3d) -> Vector3d {
        self.matrix.fixed_view::<3, 3>(0, 0) * vector
    }

    /// The translation column
    pub fn translation_part(&self) -> Vector3d {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// Length of each transformed basis vector
    pub fn scale_part(&self) -> Vector3d {
        let linear = self.matrix.fixed_view::<3, 3>(0, 0);
        Vector3::new(
            linear.column(0).norm(),
            linear.column(1).norm(),
            linear.column(2).norm(),
        )
    }

    /// Compose this transformation with another
    pub fn compose(self, other: Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Get the inverse transformation
    pub fn inverse(self) -> Option<Self> {
        self.matrix
            .try_inverse()
            .map(|inv_matrix| Self { matrix: inv_matrix })
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix - Matrix4::identity()).norm() < epsilon
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Transform3D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}

impl From<Matrix4<f64>> for Transform3D {
    fn from(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_concatenate_applies_new_operation_first() {
        let mut t = Transform3D::translation(Vector3::new(10.0, 0.0, 0.0));
        t.scale(Vector3::new(2.0, 2.0, 2.0));
        let p = t.transform_point(&Point3d::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p, Point3d::new(12.0, 2.0, 2.0));
    }

    #[test]
    fn test_post_concatenate_applies_new_operation_last() {
        let mut t = Transform3D::translation(Vector3::new(10.0, 0.0, 0.0));
        t.post_scale(Vector3::new(2.0, 2.0, 2.0));
        let p = t.transform_point(&Point3d::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p, Point3d::new(22.0, 2.0, 2.0));
    }

    #[test]
    fn test_rotations_are_right_handed_degrees() {
        let p = Point3d::new(1.0, 0.0, 0.0);
        assert_relative_eq!(
            Transform3D::rotation_z(90.0).transform_point(&p),
            Point3d::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            Transform3D::rotation_y(90.0).transform_point(&p),
            Point3d::new(0.0, 0.0, -1.0),
            epsilon = 1e-12
        );
        let q = Point3d::new(0.0, 1.0, 0.0);
        assert_relative_eq!(
            Transform3D::rotation_x(90.0).transform_point(&q),
            Point3d::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_translation_and_scale_parts() {
        let mut t = Transform3D::identity();
        t.post_translate(Vector3::new(5.0, -3.0, 0.0));
        t.post_translate(Vector3::new(5.0, -3.0, 0.0));
        assert_relative_eq!(t.translation_part(), Vector3::new(10.0, -6.0, 0.0));

        let mut s = Transform3D::identity();
        s.post_scale(Vector3::repeat(2.0));
        s.rotate_y(33.0);
        assert_relative_eq!(s.scale_part(), Vector3::repeat(2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let mut t = Transform3D::translation(Vector3::new(1.0, 2.0, 3.0));
        t.rotate_x(30.0);
        t.scale(Vector3::new(2.0, 3.0, 4.0));
        let inv = t.inverse().unwrap();
        assert!((t * inv).is_identity(1e-9));
    }
}
