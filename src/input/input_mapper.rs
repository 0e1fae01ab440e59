//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard presses and resolved clicks to high-level actions.
//! Cursor position and shift state are tracked by `PointerTracker`.

use efield_core::Polarity;
use efield_input::Click;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Place a charge at a screen position (left click, shift for negative)
    PlaceCharge { x: f32, y: f32, polarity: Polarity },
    /// Show or hide the charge markers (Space)
    ToggleMarkers,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unmapped keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Space => Some(InputAction::ToggleMarkers),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }

    /// Map a resolved left click to a charge placement
    pub fn map_click(click: Click) -> InputAction {
        InputAction::PlaceCharge {
            x: click.position.x,
            y: click.position.y,
            polarity: Polarity::from_modifier(click.shift),
        }
    }
}
