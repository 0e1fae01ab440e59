//! Field Rendering Library
//!
//! This crate provides the wgpu-based rendering pipeline for the electric
//! field visualizer. The field itself is evaluated in the field-line vertex
//! shader from one batched uniform block of charge data.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`shader::ShaderSources`] - Shader text loaded from disk at startup
//! - [`shader::compile_module`] / [`shader::link_pipeline`] - Program builder with compile/link errors
//! - [`pipeline::FieldPipeline`] - Line segments over the sample grid
//! - [`pipeline::MarkerPipeline`] - Charge markers
//! - [`renderable`] - Converts simulation state to GPU data

pub mod context;
pub mod error;
pub mod pipeline;
pub mod renderable;
pub mod shader;

pub use error::{GpuError, ShaderError};
pub use renderable::{grid_vertices, pack_uniforms, FieldStyle};
