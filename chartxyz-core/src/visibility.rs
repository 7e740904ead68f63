//! Per-frame point filtering against the chart box

use crate::clip::ClipPlanes;
use crate::point::{to_point3d, Point3f, COLOR_COMPONENTS};
use crate::transform::Transform3D;

/// Points (and their colors) that survived clipping this frame.
///
/// The buffers are reused between frames; nothing in them is meaningful
/// before the next [`VisibilityFilter::filter_into`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleSet {
    pub points: Vec<Point3f>,
    pub colors: Vec<u8>,
}

impl VisibleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.colors.clear();
    }
}

/// Tests points against a set of clip planes after moving them into clip space
#[derive(Debug, Clone, Copy)]
pub struct VisibilityFilter<'a> {
    pub to_clip_space: &'a Transform3D,
    pub planes: &'a ClipPlanes,
}

impl<'a> VisibilityFilter<'a> {
    pub fn new(to_clip_space: &'a Transform3D, planes: &'a ClipPlanes) -> Self {
        Self {
            to_clip_space,
            planes,
        }
    }

    /// Whether `point` falls outside the clip volume
    #[inline]
    pub fn is_clipped(&self, point: &Point3f) -> bool {
        let p = self.to_clip_space.transform_point(&to_point3d(point));
        self.planes.is_clipped(&p)
    }

    /// Refill `out` with the unclipped points, in input order.
    ///
    /// When `colors` is given it must hold 3 bytes per point; the kept points'
    /// colors are copied into `out.colors` in the same order.
    pub fn filter_into(&self, points: &[Point3f], colors: Option<&[u8]>, out: &mut VisibleSet) {
        out.clear();
        if let Some(colors) = colors {
            debug_assert_eq!(colors.len(), points.len() * COLOR_COMPONENTS);
            for (point, rgb) in points.iter().zip(colors.chunks_exact(COLOR_COMPONENTS)) {
                if !self.is_clipped(point) {
                    out.points.push(*point);
                    out.colors.extend_from_slice(rgb);
                }
            }
        } else {
            out.points
                .extend(points.iter().filter(|p| !self.is_clipped(p)).copied());
        }
        log::trace!(
            target: "chartxyz",
            "visibility: kept {} of {} points",
            out.points.len(),
            points.len()
        );
    }

    /// Convenience wrapper allocating a fresh [`VisibleSet`]
    pub fn filter(&self, points: &[Point3f], colors: Option<&[u8]>) -> VisibleSet {
        let mut out = VisibleSet::new();
        self.filter_into(points, colors, &mut out);
        out
    }
}
