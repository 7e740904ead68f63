//! Ordered point storage for chart data

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered point container, index-aligned with the rows it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud<T> {
    pub points: Vec<T>,
}

impl<T> PointCloud<T> {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.points
    }
}

impl<T: Copy> PointCloud<T> {
    /// Refill `out` with the points at `indices`, in the order given,
    /// reusing its allocation.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn gather_into(&self, indices: &[usize], out: &mut Vec<T>) {
        out.clear();
        out.extend(indices.iter().map(|&i| self.points[i]));
    }
}

impl<T> Default for PointCloud<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for PointCloud<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<T> FromIterator<T> for PointCloud<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3f;

    fn sample() -> PointCloud<Point3f> {
        (0..10)
            .map(|i| Point3f::new(i as f32 * 0.1, 0.0, 1.0 - i as f32 * 0.1))
            .collect()
    }

    #[test]
    fn test_gather_into_preserves_requested_order() {
        let cloud = sample();
        let mut out = Vec::new();
        cloud.gather_into(&[7, 2, 5], &mut out);
        assert_eq!(out, vec![cloud[7], cloud[2], cloud[5]]);
    }

    #[test]
    fn test_gather_into_reuses_buffer() {
        let cloud = sample();
        let mut out = vec![Point3f::origin(); 20];
        cloud.gather_into(&[1], &mut out);
        assert_eq!(out, vec![cloud[1]]);
    }

    #[test]
    #[should_panic]
    fn test_gather_out_of_range_panics() {
        sample().gather_into(&[10], &mut Vec::new());
    }

    #[test]
    fn test_collect_keeps_row_order() {
        let cloud = sample();
        assert_eq!(cloud.len(), 10);
        assert_eq!(cloud.as_slice()[3], cloud[3]);
        assert!(PointCloud::<Point3f>::default().is_empty());
    }
}
