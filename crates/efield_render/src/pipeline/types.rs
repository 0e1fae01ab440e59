//! GPU-compatible data types for the field pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use efield_core::MAX_CHARGES;

/// Number of vec4 slots holding packed charge magnitudes
pub const MAGNITUDE_SLOTS: usize = MAX_CHARGES / 4;

/// One end of a field line segment
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct GridVertex {
    /// Table-space x, y and the endpoint tag (1.0 movable, 0.0 fixed)
    pub position: [f32; 3],
}

impl GridVertex {
    pub fn new(x: f32, y: f32, tag: f32) -> Self {
        Self { position: [x, y, tag] }
    }
}

/// Per-frame uniform block shared by both pipelines
/// Layout: 432 bytes total (must match FieldUniforms in shader1.vert / shader2.vert)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FieldUniforms {
    /// Table width and height (8 bytes)
    pub table_size: [f32; 2],
    /// Number of valid entries in `positions` (4 bytes)
    pub charge_count: u32,
    /// Field scale constant (4 bytes)
    pub coulomb_constant: f32,
    /// Cap on segment length in table units (4 bytes)
    pub max_segment_length: f32,
    /// Marker half-size in table units (4 bytes)
    pub marker_size: f32,
    pub _padding: [f32; 2],
    /// Charge positions, xy used (320 bytes)
    pub positions: [[f32; 4]; MAX_CHARGES],
    /// Charge magnitudes, four per slot (80 bytes)
    pub magnitudes: [[f32; 4]; MAGNITUDE_SLOTS],
}

impl FieldUniforms {
    /// Magnitude of charge `index` as the shader reads it
    pub fn magnitude(&self, index: usize) -> f32 {
        self.magnitudes[index / 4][index % 4]
    }

    /// Store the magnitude of charge `index`
    pub fn set_magnitude(&mut self, index: usize, magnitude: f32) {
        self.magnitudes[index / 4][index % 4] = magnitude;
    }
}

impl Default for FieldUniforms {
    fn default() -> Self {
        Self {
            table_size: [2.0, 2.0],
            charge_count: 0,
            coulomb_constant: 8.988e9,
            max_segment_length: 0.25,
            marker_size: 0.04,
            _padding: [0.0; 2],
            positions: [[0.0; 4]; MAX_CHARGES],
            magnitudes: [[0.0; 4]; MAGNITUDE_SLOTS],
        }
    }
}

/// Vertices per charge marker (two triangles)
pub const MARKER_VERTEX_COUNT: u32 = 6;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_grid_vertex_size() {
        // 3 floats = 12 bytes, matches Float32x3
        assert_eq!(size_of::<GridVertex>(), 12);
    }

    #[test]
    fn test_field_uniforms_size() {
        // 8 header floats + 20 vec4 positions + 5 vec4 magnitudes = 108 floats = 432 bytes
        assert_eq!(size_of::<FieldUniforms>(), 432);
        assert_eq!(size_of::<FieldUniforms>() % 16, 0);
    }

    #[test]
    fn test_magnitude_slots_cover_all_charges() {
        assert_eq!(MAGNITUDE_SLOTS * 4, MAX_CHARGES);
    }

    #[test]
    fn test_magnitude_packing() {
        let mut u = FieldUniforms::default();
        u.set_magnitude(0, 1.0);
        u.set_magnitude(5, -2.0);
        u.set_magnitude(19, 3.0);
        assert_eq!(u.magnitudes[0][0], 1.0);
        assert_eq!(u.magnitudes[1][1], -2.0);
        assert_eq!(u.magnitudes[4][3], 3.0);
        assert_eq!(u.magnitude(5), -2.0);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<GridVertex>(), 4);
        assert_eq!(std::mem::align_of::<FieldUniforms>(), 4);
    }
}
