//! 2D Mathematics Library
//!
//! This crate provides the 2D vector type used by the electric field visualizer.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components and polar helpers

mod vec2;

pub use vec2::Vec2;
