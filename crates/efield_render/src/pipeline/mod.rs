//! Rendering pipeline components
//!
//! This module contains the field line and charge marker pipelines and the
//! uniform block they share.

pub mod draw_pass;
pub mod types;
pub mod uniforms;
pub mod field_pipeline;
pub mod marker_pipeline;

// Re-export types
pub use types::{FieldUniforms, GridVertex, MAGNITUDE_SLOTS, MARKER_VERTEX_COUNT};

// Re-export pipelines
pub use draw_pass::{draw_passes, DrawPass};
pub use field_pipeline::FieldPipeline;
pub use marker_pipeline::MarkerPipeline;
pub use uniforms::UniformBinding;
