//! Input events delivered to chart items

use chartxyz_core::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    None,
    Left,
    Middle,
    Right,
}

/// Keyboard modifiers held during a mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
        alt: false,
    };
}

/// A mouse event in scene pixels (y up), with the pointer position of the
/// previous event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseEvent {
    pub screen_pos: Vector2<f32>,
    pub last_screen_pos: Vector2<f32>,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    pub fn new(screen_pos: Vector2<f32>, button: MouseButton) -> Self {
        Self {
            screen_pos,
            last_screen_pos: screen_pos,
            button,
            modifiers: Modifiers::NONE,
        }
    }

    /// A move from `from` to `to` with `button` held
    pub fn drag(from: Vector2<f32>, to: Vector2<f32>, button: MouseButton) -> Self {
        Self {
            screen_pos: to,
            last_screen_pos: from,
            button,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// `screen_pos - last_screen_pos` in double precision
    pub fn delta(&self) -> Vector2<f64> {
        (self.screen_pos - self.last_screen_pos).cast::<f64>()
    }
}

/// A key press, identified by the character it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: char,
}

impl KeyEvent {
    pub fn new(key: char) -> Self {
        Self { key }
    }
}
