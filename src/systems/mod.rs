//! Application systems
//!
//! Window, simulation and render concerns, kept out of main.rs so they can
//! be tested on their own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
