//! Electric field visualizer application library
//!
//! Exposes configuration, input mapping and the per-frame systems so they
//! can be exercised from integration tests.

pub mod config;
pub mod input;
pub mod systems;
