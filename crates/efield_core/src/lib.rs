//! Core types for the electric field visualizer
//!
//! This crate holds everything that changes from frame to frame, independent
//! of any window or GPU:
//!
//! - [`Charge`] - A point charge with position and signed magnitude
//! - [`ChargeStore`] - Bounded collection of charges
//! - [`TableSpace`] - Logical coordinate system and screen mapping
//! - [`RotationUpdater`] - Orbits charges around the origin each tick
//! - [`GridGenerator`] - Jittered sample grid for field line segments
//! - [`SimulationState`] - Everything above, owned by the application

mod charge;
mod charge_store;
mod error;
mod grid;
mod rotation;
mod state;
mod table;

pub use charge::{Charge, Polarity, DEFAULT_CHARGE_MAGNITUDE};
pub use charge_store::{ChargeStore, MAX_CHARGES};
pub use error::ChargeError;
pub use grid::{GridGenerator, GridPoint, GridPointKind, DEFAULT_GRID_JITTER, DEFAULT_GRID_SPACING};
pub use rotation::{RotationUpdater, DEFAULT_ANGULAR_STEP};
pub use state::SimulationState;
pub use table::{TableSpace, DEFAULT_TABLE_WIDTH};

// Re-export the vector type for convenience
pub use efield_math::Vec2;
