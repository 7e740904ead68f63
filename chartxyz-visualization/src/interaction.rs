//! Mouse and keyboard handling for 3D charts
//!
//! [`InteractionController`] turns input events into changes of a
//! [`ViewState`]. It does not touch the scene; the chart marks the scene dirty
//! and notifies observers with the [`InteractionEvent`] returned here.

use crate::config::ChartConfig;
use crate::context::Painter;
use crate::events::{KeyEvent, Modifiers, MouseButton, MouseEvent};
use crate::scene::{InteractionEvent, Scene};
use crate::view::{CanonicalView, ViewState};

/// A scene item that paints itself and reacts to input. Every event handler
/// returns whether the item consumed the event.
pub trait ChartItem {
    /// Draw the item. Returns `false` when nothing could be drawn.
    fn paint(&mut self, painter: &mut dyn Painter) -> bool;

    /// Whether the item wants mouse events at all
    fn hit(&self, event: &MouseEvent) -> bool;

    fn mouse_button_press_event(&mut self, event: &MouseEvent) -> bool;

    fn mouse_move_event(&mut self, event: &MouseEvent) -> bool;

    /// `delta` is in wheel notches, positive away from the user
    fn mouse_wheel_event(&mut self, event: &MouseEvent, delta: i32) -> bool;

    fn key_press_event(&mut self, event: &KeyEvent) -> bool;
}

/// What a mouse drag does, from the held button and modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGesture {
    Rotate,
    Spin,
    Zoom,
    Pan,
}

impl DragGesture {
    /// Left drags rotate (spin with shift), right drags zoom (pan with
    /// shift). Only shift alone selects the alternate gesture; any other
    /// modifier combination keeps the plain one.
    pub fn classify(button: MouseButton, modifiers: Modifiers) -> Option<Self> {
        let shift = modifiers == Modifiers::SHIFT;
        match (button, shift) {
            (MouseButton::Left, false) => Some(DragGesture::Rotate),
            (MouseButton::Left, true) => Some(DragGesture::Spin),
            (MouseButton::Right, false) => Some(DragGesture::Zoom),
            (MouseButton::Right, true) => Some(DragGesture::Pan),
            _ => None,
        }
    }
}

/// Sensitivities for turning input into view changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionController {
    pub rotate_sensitivity: f64,
    pub zoom_drag_base: f64,
    pub wheel_notches_per_doubling: f64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

impl InteractionController {
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            rotate_sensitivity: config.rotate_sensitivity,
            zoom_drag_base: config.zoom_drag_base,
            wheel_notches_per_doubling: config.wheel_notches_per_doubling,
        }
    }

    /// Only the left button is claimed on press
    pub fn button_press(&self, event: &MouseEvent) -> bool {
        event.button == MouseButton::Left
    }

    /// Apply a drag to `view`
    pub fn drag(
        &self,
        event: &MouseEvent,
        scene: &Scene,
        view: &mut ViewState,
    ) -> Option<InteractionEvent> {
        let gesture = DragGesture::classify(event.button, event.modifiers)?;
        let change = match gesture {
            DragGesture::Rotate => self.rotate(event, scene, view),
            DragGesture::Spin => Self::spin(event, view),
            DragGesture::Zoom => self.zoom(event, scene, view),
            DragGesture::Pan => Self::pan(event, view),
        };
        Some(change)
    }

    /// A drag across the full viewport turns the view by
    /// `rotate_sensitivity` degrees
    fn rotate(&self, event: &MouseEvent, scene: &Scene, view: &mut ViewState) -> InteractionEvent {
        let delta = event.delta();
        let about_y = per_extent(self.rotate_sensitivity * delta.x, scene.width());
        let about_x = -per_extent(self.rotate_sensitivity * delta.y, scene.height());
        view.rotate(about_y, about_x);
        InteractionEvent::Rotated { about_y, about_x }
    }

    /// Rotate about z by the change in the pointer's polar angle around the
    /// scene origin
    fn spin(event: &MouseEvent, view: &mut ViewState) -> InteractionEvent {
        let pos = event.screen_pos.cast::<f64>();
        let last = event.last_screen_pos.cast::<f64>();
        let new_angle = pos.y.atan2(pos.x).to_degrees();
        let old_angle = last.y.atan2(last.x).to_degrees();
        let degrees = -(new_angle - old_angle);
        view.spin(degrees);
        InteractionEvent::Spun { degrees }
    }

    /// Dragging down by the full viewport height zooms by `zoom_drag_base`
    fn zoom(&self, event: &MouseEvent, scene: &Scene, view: &mut ViewState) -> InteractionEvent {
        let delta = per_extent(
            event.last_screen_pos.y as f64 - event.screen_pos.y as f64,
            scene.height(),
        );
        let factor = self.zoom_drag_base.powf(delta);
        view.zoom(factor);
        InteractionEvent::Zoomed { factor }
    }

    fn pan(event: &MouseEvent, view: &mut ViewState) -> InteractionEvent {
        let delta = event.delta();
        view.pan(delta.x, delta.y);
        InteractionEvent::Panned {
            dx: delta.x,
            dy: delta.y,
        }
    }

    /// `wheel_notches_per_doubling` notches double the zoom
    pub fn wheel(&self, delta: i32, view: &mut ViewState) -> InteractionEvent {
        let factor = 2f64.powf(delta as f64 / self.wheel_notches_per_doubling);
        view.zoom(factor);
        InteractionEvent::Zoomed { factor }
    }

    /// Switch to a canonical view. Keys without a view are not consumed.
    pub fn key(&self, event: &KeyEvent, view: &mut ViewState) -> Option<InteractionEvent> {
        let canonical = CanonicalView::from_key(event.key)?;
        view.look(canonical);
        Some(InteractionEvent::ViewChanged(canonical))
    }
}

/// `amount / extent`, or nothing when the viewport is collapsed
fn per_extent(amount: f64, extent: f32) -> f64 {
    if extent == 0.0 {
        0.0
    } else {
        amount / extent as f64
    }
}
