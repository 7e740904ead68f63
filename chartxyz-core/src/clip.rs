//! Clip planes bounding the transformed unit cube
//!
//! The chart box is the unit cube pushed through the box transform. Each pair
//! of opposite faces gets a plane built from two edge vectors at a shared
//! corner; the planes are tested with the unsigned plane function, so a pair
//! of faces together bounds a slab. One threshold, the distance from the first
//! face to the far corner, is shared by all six planes. Every such distance is
//! a triple product of the box edges, so for any invertible affine box
//! transform each slab test reduces to "between 0 and 1 along this cube axis".

use crate::plane::Plane;
use crate::point::{Point3d, Point3f};
use crate::transform::Transform3D;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Unit cube corners. Corner `i` has x = bit 2, y = bit 1, z = bit 0.
pub const UNIT_CUBE: [[f64; 3]; 8] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0],
    [0.0, 1.0, 1.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 1.0, 1.0],
];

/// The six face planes of the transformed chart box plus the shared threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipPlanes {
    pub corners: [Point3d; 8],
    pub faces: [Plane; 6],
    pub max_distance: f64,
}

impl ClipPlanes {
    /// Derive the planes for the unit cube as placed by `box_transform`
    pub fn from_box_transform(box_transform: &Transform3D) -> Self {
        let corners: [Point3d; 8] = std::array::from_fn(|i| {
            let [x, y, z] = UNIT_CUBE[i];
            box_transform.transform_point(&Point3d::new(x, y, z))
        });
        let c = &corners;
        let face = |anchor: usize, a: usize, b: usize, origin: usize| {
            let normal = (c[a] - c[anchor]).cross(&(c[b] - c[anchor]));
            Plane::new(normal, c[origin])
        };

        // x faces: 0,1,2,3 against 4,5,6,7
        // y faces: 0,1,4,5 against 2,3,6,7
        // z faces: 0,2,4,6 against 1,3,5,7
        let faces = [
            face(0, 1, 2, 3),
            face(4, 5, 6, 7),
            face(0, 1, 4, 5),
            face(2, 3, 6, 7),
            face(0, 2, 4, 6),
            face(1, 3, 5, 7),
        ];
        let max_distance = faces[0].distance(&corners[7]);

        Self {
            corners,
            faces,
            max_distance,
        }
    }

    /// Whether a point already in clip space lies outside any slab
    #[inline]
    pub fn is_clipped(&self, point: &Point3d) -> bool {
        self.faces
            .iter()
            .any(|face| face.distance(point) > self.max_distance)
    }

    /// All six plane distances for `point`, in face order
    pub fn distances(&self, point: &Point3d) -> [f64; 6] {
        std::array::from_fn(|i| self.faces[i].distance(point))
    }

    /// Box corners narrowed to chart precision, for drawing
    pub fn corners_f32(&self) -> [Point3f; 8] {
        std::array::from_fn(|i| crate::point::to_point3f(&self.corners[i]))
    }

    /// Center of the transformed box
    pub fn center(&self) -> Point3d {
        let sum = self
            .corners
            .iter()
            .fold(Vector3::zeros(), |acc, c| acc + c.coords);
        Point3d::from(sum / 8.0)
    }
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self::from_box_transform(&Transform3D::identity())
    }
}
