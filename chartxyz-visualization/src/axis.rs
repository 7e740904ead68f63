//! Chart axes
//!
//! An axis only carries where it sits on screen and what it is labelled; the
//! chart reads `position1`/`position2` to size the box.

use chartxyz_core::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Screen-space start of the axis, in pixels
    pub position1: Vector2<f32>,
    /// Screen-space end of the axis, in pixels
    pub position2: Vector2<f32>,
    /// Data range mapped onto the axis
    pub range: (f64, f64),
    pub title: String,
}

impl Axis {
    pub fn new(position1: Vector2<f32>, position2: Vector2<f32>) -> Self {
        Self {
            position1,
            position2,
            range: (0.0, 1.0),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(Vector2::zeros(), Vector2::new(1.0, 1.0))
    }
}

/// Pixel rectangle the chart occupies within its scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Lay three axes out over `rect`: x runs along the bottom edge, y and z both
/// run up the left edge (z is only seen once the chart is rotated).
pub fn axes_for_rect(rect: &Rect) -> [Axis; 3] {
    let origin = Vector2::new(rect.x, rect.y);
    let right = Vector2::new(rect.x + rect.width, rect.y);
    let up = Vector2::new(rect.x, rect.y + rect.height);
    [
        Axis::new(origin, right),
        Axis::new(origin, up),
        Axis::new(origin, up),
    ]
}
