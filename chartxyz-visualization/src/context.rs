//! Drawing surfaces the chart paints onto
//!
//! A [`Painter`] is the 2D surface of a scene: it lays out text and may expose
//! a [`Context3D`] for geometry drawn through a matrix stack. Hosts implement
//! these for their backend; [`RecordingPainter`](crate::RecordingPainter) and
//! [`SvgPainter`](crate::SvgPainter) ship with this crate.

use chartxyz_core::{Point3d, Point3f, Transform3D};
use serde::{Deserialize, Serialize};

/// Stroke/point style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    /// RGBA
    pub color: [u8; 4],
    /// Line width, or point diameter, in pixels
    pub width: f32,
}

impl Pen {
    pub const fn new(color: [u8; 4], width: f32) -> Self {
        Self { color, width }
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.color[0], self.color[1], self.color[2]]
    }

    pub fn opacity(&self) -> f32 {
        self.color[3] as f32 / 255.0
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new([0, 0, 0, 255], 1.0)
    }
}

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Justification {
    #[default]
    Left,
    Centered,
    Right,
}

/// Font and placement settings for 2D text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProperty {
    pub justification: Justification,
    /// RGB in [0, 1]
    pub color: [f64; 3],
    pub font_family: String,
    pub font_size: u32,
    /// Counter-clockwise rotation in degrees
    pub orientation: f64,
}

impl Default for TextProperty {
    fn default() -> Self {
        Self {
            justification: Justification::Left,
            color: [0.0, 0.0, 0.0],
            font_family: "Arial".to_string(),
            font_size: 14,
            orientation: 0.0,
        }
    }
}

/// 3D drawing through a transform stack
pub trait Context3D {
    fn push_matrix(&mut self);

    fn pop_matrix(&mut self);

    /// Right-multiply `transform` onto the current matrix
    fn append_transform(&mut self, transform: &Transform3D);

    fn apply_pen(&mut self, pen: &Pen);

    /// Draw a point batch. `colors`, when given, holds 3 bytes per point.
    fn draw_points(&mut self, points: &[Point3f], colors: Option<&[u8]>);

    fn draw_line(&mut self, start: &Point3f, end: &Point3f);
}

/// The 2D surface of a scene
pub trait Painter {
    /// The 3D context, if this surface supports one
    fn context_3d(&mut self) -> Option<&mut dyn Context3D>;

    fn apply_text_prop(&mut self, prop: &TextProperty);

    /// `[x, y, width, height]` of `text` drawn at the origin with the current
    /// text property
    fn compute_string_bounds(&mut self, text: &str) -> [f32; 4];

    fn draw_string(&mut self, x: f32, y: f32, text: &str);
}

/// A push/pop stack of transforms, for surfaces that project geometry
/// themselves
#[derive(Debug, Clone, Default)]
pub struct MatrixStack {
    current: Transform3D,
    saved: Vec<Transform3D>,
}

impl MatrixStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the last pushed matrix. Popping an empty stack resets to
    /// identity.
    pub fn pop(&mut self) {
        self.current = self.saved.pop().unwrap_or_default();
    }

    pub fn append(&mut self, transform: &Transform3D) {
        self.current.concatenate(transform);
    }

    pub fn current(&self) -> &Transform3D {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn transform_point(&self, point: &Point3f) -> Point3d {
        self.current
            .transform_point(&chartxyz_core::to_point3d(point))
    }
}

/// Rough text extent when no font metrics are available: a fixed advance of
/// 0.6 em per character and one em of height
pub fn estimate_string_bounds(text: &str, prop: &TextProperty) -> [f32; 4] {
    let em = prop.font_size as f32;
    [0.0, 0.0, text.chars().count() as f32 * em * 0.6, em]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartxyz_core::Vector3;

    #[test]
    fn test_matrix_stack_push_pop() {
        let mut stack = MatrixStack::new();
        stack.push();
        stack.append(&Transform3D::translation(Vector3::new(1.0, 2.0, 3.0)));
        let p = stack.transform_point(&Point3f::origin());
        assert_eq!(p, Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(stack.depth(), 1);
        stack.pop();
        assert!(stack.current().is_identity(1e-12));
        stack.pop();
        assert!(stack.current().is_identity(1e-12));
    }

    #[test]
    fn test_string_bounds_estimate() {
        let prop = TextProperty::default();
        assert_eq!(estimate_string_bounds("abcde", &prop), [0.0, 0.0, 42.0, 14.0]);
    }
}
