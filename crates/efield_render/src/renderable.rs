//! Conversion from simulation state to GPU data

use efield_core::{GridPoint, SimulationState, MAX_CHARGES};

use crate::pipeline::{FieldUniforms, GridVertex};

/// Rendering constants that do not change per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStyle {
    /// Scale applied to the superposed field
    pub coulomb_constant: f32,
    /// Cap on the displayed segment length, in table units
    pub max_segment_length: f32,
    /// Marker half-size, in table units
    pub marker_size: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            coulomb_constant: 8.988e9,
            max_segment_length: 0.25,
            marker_size: 0.04,
        }
    }
}

/// Convert generated grid points to vertex buffer contents
pub fn grid_vertices(points: &[GridPoint]) -> Vec<GridVertex> {
    points
        .iter()
        .map(|p| GridVertex { position: p.to_array() })
        .collect()
}

/// Pack the current charges and table size into the uniform block
pub fn pack_uniforms(state: &SimulationState, style: &FieldStyle) -> FieldUniforms {
    let table = state.table();
    let mut uniforms = FieldUniforms {
        table_size: [table.width(), table.height()],
        coulomb_constant: style.coulomb_constant,
        max_segment_length: style.max_segment_length,
        marker_size: style.marker_size,
        ..FieldUniforms::default()
    };

    let mut count = 0;
    for (i, charge) in state.charges().iter().take(MAX_CHARGES).enumerate() {
        uniforms.positions[i] = [charge.position.x, charge.position.y, 0.0, 0.0];
        uniforms.set_magnitude(i, charge.magnitude);
        count += 1;
    }
    uniforms.charge_count = count;
    uniforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use efield_core::{GridGenerator, Polarity, TableSpace, DEFAULT_CHARGE_MAGNITUDE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_vertices_keep_tags() {
        let table = TableSpace::new(3.0, 1200, 600);
        let points = GridGenerator::default().generate(&table, &mut StdRng::seed_from_u64(5));
        let vertices = grid_vertices(&points);
        assert_eq!(vertices.len(), points.len());
        assert_eq!(vertices[0].position[2], 1.0);
        assert_eq!(vertices[1].position[2], 0.0);
        assert_eq!(vertices[0].position[0], points[0].position.x);
    }

    #[test]
    fn test_pack_empty_state() {
        let state = SimulationState::new(TableSpace::new(3.0, 1200, 600));
        let uniforms = pack_uniforms(&state, &FieldStyle::default());
        assert_eq!(uniforms.charge_count, 0);
        assert_eq!(uniforms.table_size, [3.0, 1.5]);
        assert_eq!(uniforms.max_segment_length, 0.25);
    }

    #[test]
    fn test_pack_charges() {
        let mut state = SimulationState::new(TableSpace::new(3.0, 1000, 500));
        state.add_charge(0.0, 0.0, Polarity::Positive).unwrap();
        state.add_charge(1000.0, 500.0, Polarity::Negative).unwrap();

        let style = FieldStyle {
            coulomb_constant: 1.0,
            max_segment_length: 0.1,
            marker_size: 0.02,
        };
        let uniforms = pack_uniforms(&state, &style);

        assert_eq!(uniforms.charge_count, 2);
        assert_eq!(uniforms.positions[0][..2], [-1.5, 0.75]);
        assert_eq!(uniforms.positions[1][..2], [1.5, -0.75]);
        assert_eq!(uniforms.magnitude(0), DEFAULT_CHARGE_MAGNITUDE);
        assert_eq!(uniforms.magnitude(1), -DEFAULT_CHARGE_MAGNITUDE);
        assert_eq!(uniforms.magnitude(2), 0.0);
        assert_eq!(uniforms.coulomb_constant, 1.0);
        assert_eq!(uniforms.marker_size, 0.02);
    }

    #[test]
    fn test_pack_follows_rotation() {
        let mut state = SimulationState::new(TableSpace::new(3.0, 1000, 500));
        state.add_charge(750.0, 250.0, Polarity::Positive).unwrap();
        state.tick();
        let uniforms = pack_uniforms(&state, &FieldStyle::default());
        let p = state.charges().charges()[0].position;
        assert_eq!(uniforms.positions[0][..2], [p.x, p.y]);
    }
}
