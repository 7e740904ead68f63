//! Plane equations in point-normal form

use crate::point::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// A plane through `origin` with (not necessarily unit) `normal`.
///
/// Distances are measured with the raw normal, so they are scaled by its
/// length. Comparisons between planes are only meaningful when their normals
/// have been built the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vector3d,
    pub origin: Point3d,
}

impl Plane {
    pub fn new(normal: Vector3d, origin: Point3d) -> Self {
        Self { normal, origin }
    }

    /// `n . (p - o)`: positive on the side the normal points to
    #[inline]
    pub fn signed_distance(&self, point: &Point3d) -> f64 {
        self.normal.dot(&(point - self.origin))
    }

    /// Magnitude of [`signed_distance`](Self::signed_distance)
    #[inline]
    pub fn distance(&self, point: &Point3d) -> f64 {
        self.signed_distance(point).abs()
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vector3d::z(),
            origin: Point3d::origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_and_unsigned_distance() {
        let plane = Plane::new(Vector3d::new(0.0, 0.0, 2.0), Point3d::new(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.signed_distance(&Point3d::new(5.0, 5.0, 3.0)), 4.0);
        assert_relative_eq!(plane.signed_distance(&Point3d::new(0.0, 0.0, 0.0)), -2.0);
        assert_relative_eq!(plane.distance(&Point3d::new(0.0, 0.0, 0.0)), 2.0);
        assert_relative_eq!(plane.distance(&Point3d::new(9.0, -4.0, 1.0)), 0.0);
    }
}
