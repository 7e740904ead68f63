//! The scene a chart lives in: viewport size, redraw flag and interaction
//! observers

use crate::view::CanonicalView;

/// Viewport size plus a level-triggered redraw request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    width: f32,
    height: f32,
    dirty: bool,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            dirty: true,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.dirty = true;
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the redraw request
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(640.0, 480.0)
    }
}

/// What a successful interaction changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    /// Incremental rotation about y then x, in degrees
    Rotated { about_y: f64, about_x: f64 },
    /// Incremental rotation about z, in degrees
    Spun { degrees: f64 },
    Panned { dx: f64, dy: f64 },
    /// Multiplicative zoom step
    Zoomed { factor: f64 },
    ViewChanged(CanonicalView),
}

type Observer = Box<dyn FnMut(&InteractionEvent)>;

/// Callbacks run after every successful interaction
#[derive(Default)]
pub struct InteractionObservers {
    observers: Vec<Observer>,
}

impl InteractionObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, observer: F)
    where
        F: FnMut(&InteractionEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn notify(&mut self, event: &InteractionEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for InteractionObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionObservers")
            .field("len", &self.observers.len())
            .finish()
    }
}
