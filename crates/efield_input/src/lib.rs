//! Pointer input for the electric field visualizer
//!
//! winit reports the cursor position, modifier keys and button presses as
//! separate events. This crate folds them into one [`PointerTracker`] so a
//! click can be turned into a placement with a position and a polarity.

mod pointer_tracker;

pub use pointer_tracker::{PointerTracker, Click};
