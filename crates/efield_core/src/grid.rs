//! Jittered sample grid for field line segments
//!
//! Each lattice cell produces a pair of points at the same jittered position:
//! a movable endpoint (pushed along the field by the vertex shader) followed
//! by a fixed anchor. Drawn as a line list, each pair is one segment.
//!
//! The lattice starts half a spacing inside the left/bottom edge, so the
//! number of points depends only on the table size and spacing:
//! `2 * cols * rows` with `cols = ceil(width / spacing)` and
//! `rows = ceil(height / spacing)`.

use efield_math::Vec2;
use rand::Rng;

use crate::TableSpace;

/// Default distance between lattice points, in table units
pub const DEFAULT_GRID_SPACING: f32 = 0.05;

/// Default maximum jitter per axis, in table units
pub const DEFAULT_GRID_JITTER: f32 = 1.0 / 40.0;

/// Slack for spans that are exact multiples of the spacing
const COUNT_EPSILON: f64 = 1e-6;

/// Which end of a field line segment a point is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridPointKind {
    /// Displaced along the local field direction
    Movable,
    /// Stays at the sample position
    Fixed,
}

impl GridPointKind {
    /// Discriminant passed to the shader as the third vertex component
    #[inline]
    pub fn tag(self) -> f32 {
        match self {
            GridPointKind::Movable => 1.0,
            GridPointKind::Fixed => 0.0,
        }
    }
}

/// One end of a field line segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub position: Vec2,
    pub kind: GridPointKind,
}

impl GridPoint {
    /// Position and tag as `[x, y, tag]`
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.position.x, self.position.y, self.kind.tag()]
    }
}

/// Builds the sample grid once at startup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGenerator {
    /// Distance between lattice points
    pub spacing: f32,
    /// Maximum absolute offset applied per axis
    pub jitter: f32,
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SPACING, DEFAULT_GRID_JITTER)
    }
}

impl GridGenerator {
    pub fn new(spacing: f32, jitter: f32) -> Self {
        Self {
            spacing,
            jitter: jitter.abs(),
        }
    }

    /// Number of lattice steps covering `extent`
    fn steps(&self, extent: f32) -> usize {
        if self.spacing <= 0.0 || extent <= 0.0 {
            return 0;
        }
        (extent as f64 / self.spacing as f64 - COUNT_EPSILON).ceil().max(0.0) as usize
    }

    /// Lattice dimensions as (columns, rows)
    pub fn dimensions(&self, table: &TableSpace) -> (usize, usize) {
        (self.steps(table.width()), self.steps(table.height()))
    }

    /// Number of points [`generate`](Self::generate) will produce
    pub fn point_count(&self, table: &TableSpace) -> usize {
        let (cols, rows) = self.dimensions(table);
        2 * cols * rows
    }

    /// Generate the jittered point pairs, column by column
    pub fn generate<R: Rng + ?Sized>(&self, table: &TableSpace, rng: &mut R) -> Vec<GridPoint> {
        let (cols, rows) = self.dimensions(table);
        let x0 = -table.width() / 2.0 + self.spacing / 2.0;
        let y0 = -table.height() / 2.0 + self.spacing / 2.0;

        let mut points = Vec::with_capacity(2 * cols * rows);
        for i in 0..cols {
            let x = x0 + i as f32 * self.spacing;
            for j in 0..rows {
                let y = y0 + j as f32 * self.spacing;
                let position = Vec2::new(
                    x + rng.gen_range(-self.jitter..=self.jitter),
                    y + rng.gen_range(-self.jitter..=self.jitter),
                );
                points.push(GridPoint { position, kind: GridPointKind::Movable });
                points.push(GridPoint { position, kind: GridPointKind::Fixed });
            }
        }

        log::debug!("Generated {}x{} sample grid ({} points)", cols, rows, points.len());
        points
    }
}
