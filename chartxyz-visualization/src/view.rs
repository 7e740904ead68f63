//! View state and the two per-frame transforms built from it
//!
//! The point transform places data points on screen:
//!
//! ```text
//! Translation * T(c) * Rotation * Scale * T(-c) * Base
//! ```
//!
//! with `c` the screen-space center of the chart box, so rotation and zoom
//! pivot around the box center while pan and the base transform act in chart
//! space. The box transform places the unit cube drawn as the wireframe:
//!
//! ```text
//! T(origin) * S(extent) * T(+0.5) * Rotation * T(-0.5)
//! ```
//!
//! Zoom is left out of the box so the frame keeps its size.

use crate::axis::Axis;
use chartxyz_core::{Transform3D, Vector3, Vector3d};
use serde::{Deserialize, Serialize};

/// One of the six axis-aligned orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalView {
    LookDownX,
    LookUpX,
    LookDownY,
    LookUpY,
    LookDownZ,
    LookUpZ,
}

impl CanonicalView {
    pub const ALL: [CanonicalView; 6] = [
        CanonicalView::LookDownX,
        CanonicalView::LookUpX,
        CanonicalView::LookDownY,
        CanonicalView::LookUpY,
        CanonicalView::LookDownZ,
        CanonicalView::LookUpZ,
    ];

    /// Lower case looks down an axis, upper case looks up it
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'x' => Some(CanonicalView::LookDownX),
            'X' => Some(CanonicalView::LookUpX),
            'y' => Some(CanonicalView::LookDownY),
            'Y' => Some(CanonicalView::LookUpY),
            'z' => Some(CanonicalView::LookDownZ),
            'Z' => Some(CanonicalView::LookUpZ),
            _ => None,
        }
    }

    /// The absolute rotation this view stands for
    pub fn rotation(&self) -> Transform3D {
        match self {
            CanonicalView::LookDownX => Transform3D::rotation_y(90.0),
            CanonicalView::LookUpX => Transform3D::rotation_y(-90.0),
            CanonicalView::LookDownY => Transform3D::rotation_x(90.0),
            CanonicalView::LookUpY => Transform3D::rotation_x(-90.0),
            CanonicalView::LookDownZ => Transform3D::identity(),
            CanonicalView::LookUpZ => Transform3D::rotation_z(180.0),
        }
    }
}

/// Screen-space center of the chart box
pub fn box_center(axes: &[Axis; 3]) -> Vector3d {
    let mid = |a: f32, b: f32| ((b - a) / 2.0 + a) as f64;
    Vector3::new(
        mid(axes[0].position1.x, axes[0].position2.x),
        mid(axes[1].position1.y, axes[1].position2.y),
        mid(axes[2].position1.y, axes[2].position2.y),
    )
}

/// Pixel extent of the chart box along each axis
pub fn box_extent(axes: &[Axis; 3]) -> Vector3d {
    Vector3::new(
        (axes[0].position2.x - axes[0].position1.x) as f64,
        (axes[1].position2.y - axes[1].position1.y) as f64,
        (axes[2].position2.y - axes[2].position1.y) as f64,
    )
}

/// Screen position of the box corner at unit-cube (0, 0, 0)
pub fn box_origin(axes: &[Axis; 3]) -> Vector3d {
    Vector3::new(
        axes[0].position1.x as f64,
        axes[1].position1.y as f64,
        axes[2].position1.y as f64,
    )
}

/// Maps the unit cube onto the unrotated chart box. Suitable as the base
/// transform for points already normalized to [0, 1].
pub fn unit_cube_to_axes(axes: &[Axis; 3]) -> Transform3D {
    let mut t = Transform3D::translation(box_origin(axes));
    t.scale(box_extent(axes));
    t
}

/// Pan, zoom, rotation and base transform of a chart, each kept separately
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub translation: Transform3D,
    pub scale: Transform3D,
    pub rotation: Transform3D,
    pub base: Transform3D,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            translation: Transform3D::identity(),
            scale: Transform3D::identity(),
            rotation: Transform3D::identity(),
            base: Transform3D::identity(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transform points are drawn with
    pub fn point_transform(&self, axes: &[Axis; 3]) -> Transform3D {
        self.compose_point_transform(axes, &self.scale)
    }

    /// The point transform with zoom left out
    pub fn unscaled_point_transform(&self, axes: &[Axis; 3]) -> Transform3D {
        self.compose_point_transform(axes, &Transform3D::identity())
    }

    fn compose_point_transform(&self, axes: &[Axis; 3], scale: &Transform3D) -> Transform3D {
        let center = box_center(axes);
        let mut t = Transform3D::identity();
        t.concatenate(&self.translation);
        t.translate(center);
        t.concatenate(&self.rotation);
        t.concatenate(scale);
        t.translate(-center);
        t.concatenate(&self.base);
        t
    }

    /// The transform the unit-cube wireframe is drawn with
    pub fn box_transform(&self, axes: &[Axis; 3]) -> Transform3D {
        let mut t = Transform3D::identity();
        t.post_translate(Vector3::repeat(-0.5));
        t.post_concatenate(&self.rotation);
        t.post_translate(Vector3::repeat(0.5));
        t.post_scale(box_extent(axes));
        t.post_translate(box_origin(axes));
        t
    }

    /// Accumulate a rotation of `about_y` then `about_x` degrees
    pub fn rotate(&mut self, about_y: f64, about_x: f64) {
        self.rotation.rotate_y(about_y);
        self.rotation.rotate_x(about_x);
    }

    /// Accumulate a rotation about z, in degrees
    pub fn spin(&mut self, degrees: f64) {
        self.rotation.rotate_z(degrees);
    }

    /// Multiply the zoom by `factor` on every axis
    pub fn zoom(&mut self, factor: f64) {
        self.scale.post_scale(Vector3::repeat(factor));
    }

    /// Add a screen-plane offset to the pan
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translation.post_translate(Vector3::new(dx, dy, 0.0));
    }

    /// Discard the accumulated rotation and adopt `view`
    pub fn look(&mut self, view: CanonicalView) {
        self.rotation.set_identity();
        self.rotation.concatenate(&view.rotation());
    }

    /// Current uniform zoom factor
    pub fn zoom_factor(&self) -> f64 {
        self.scale.matrix[(0, 0)]
    }

    /// Current pan offset
    pub fn pan_offset(&self) -> Vector3d {
        self.translation.translation_part()
    }
}
