//! Cursor and modifier tracking
//!
//! Controls:
//! - Left click: place a charge at the cursor
//! - Shift + left click: place a negative charge

use efield_math::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, ModifiersState};

/// A left click resolved against the tracked cursor state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Click {
    /// Cursor position in physical pixels, origin top-left, y down
    pub position: Vec2,
    /// Shift was held when the button went down
    pub shift: bool,
}

/// Tracks the last cursor position and shift state between events
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    position: Option<Vec2>,
    // Shift from ModifiersChanged and from raw key events; either counts
    shift_modifier: bool,
    shift_keys: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a cursor move (physical pixels relative to the window)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = Some(Vec2::new(x as f32, y as f32));
    }

    /// Process the cursor leaving the window
    pub fn process_cursor_left(&mut self) {
        self.position = None;
    }

    /// Process a modifier change
    pub fn process_modifiers(&mut self, modifiers: ModifiersState) {
        self.shift_modifier = modifiers.shift_key();
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was a shift key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.shift_keys = state == ElementState::Pressed;
                true
            }
            _ => false,
        }
    }

    /// Process the window losing focus
    ///
    /// Key releases that happen while unfocused are not delivered, so any
    /// held shift is forgotten.
    pub fn process_focus_lost(&mut self) {
        self.shift_modifier = false;
        self.shift_keys = false;
    }

    /// Resolve a mouse button event into a click
    ///
    /// Only left presses count, and only while the cursor is over the
    /// window and inside `canvas_size` (width, height) in pixels.
    pub fn process_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
        canvas_size: (u32, u32),
    ) -> Option<Click> {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return None;
        }
        let position = self.position?;
        let (width, height) = canvas_size;
        let inside = (0.0..=width as f32).contains(&position.x)
            && (0.0..=height as f32).contains(&position.y);
        if !inside {
            return None;
        }
        Some(Click {
            position,
            shift: self.is_shift_held(),
        })
    }

    /// Last known cursor position, if the cursor is over the window
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_shift_held(&self) -> bool {
        self.shift_modifier || self.shift_keys
    }
}
