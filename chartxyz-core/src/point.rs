//! Point and color types

use nalgebra::{Point3, Vector3};

/// A 3D point with single precision coordinates, as stored by the chart
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates, used for clip-space math
pub type Point3d = Point3<f64>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// An 8-bit RGB triple
pub type Rgb = [u8; 3];

/// Number of bytes per point in a flat color buffer
pub const COLOR_COMPONENTS: usize = 3;

/// Widen a chart point to double precision
#[inline]
pub fn to_point3d(point: &Point3f) -> Point3d {
    Point3d::new(point.x as f64, point.y as f64, point.z as f64)
}

/// Narrow a double precision point back to chart precision
#[inline]
pub fn to_point3f(point: &Point3d) -> Point3f {
    Point3f::new(point.x as f32, point.y as f32, point.z as f32)
}

/// Read the color of point `index` out of a flat RGB buffer
#[inline]
pub fn color_at(colors: &[u8], index: usize) -> Rgb {
    let start = index * COLOR_COMPONENTS;
    [colors[start], colors[start + 1], colors[start + 2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_at_reads_triplets() {
        let colors = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(color_at(&colors, 0), [1, 2, 3]);
        assert_eq!(color_at(&colors, 1), [4, 5, 6]);
    }

    #[test]
    fn test_precision_conversions() {
        let p = Point3f::new(0.25, 0.5, 0.75);
        assert_eq!(to_point3f(&to_point3d(&p)), p);
    }
}
