//! Simulation state owned by the application
//!
//! Bundles the charges, the table space and the display flags so that the
//! update and render systems receive everything by reference instead of
//! sharing globals.

use crate::{
    Charge, ChargeError, ChargeStore, Polarity, RotationUpdater, TableSpace,
    DEFAULT_CHARGE_MAGNITUDE,
};

/// All mutable state of the visualizer
#[derive(Clone, Debug)]
pub struct SimulationState {
    charges: ChargeStore,
    table: TableSpace,
    rotation: RotationUpdater,
    charge_magnitude: f32,
    show_markers: bool,
}

impl SimulationState {
    /// Create a state for the given table and an empty charge store
    pub fn new(table: TableSpace) -> Self {
        Self {
            charges: ChargeStore::new(),
            table,
            rotation: RotationUpdater::default(),
            charge_magnitude: DEFAULT_CHARGE_MAGNITUDE,
            show_markers: true,
        }
    }

    /// Set the absolute magnitude given to newly placed charges
    ///
    /// Zero and non-finite values would give charges with no polarity, so
    /// they are ignored and the current magnitude is kept.
    pub fn with_charge_magnitude(mut self, magnitude: f32) -> Self {
        let magnitude = magnitude.abs();
        if magnitude > 0.0 && magnitude.is_finite() {
            self.charge_magnitude = magnitude;
        } else {
            log::warn!(
                "Ignoring charge magnitude {}; keeping {:e}",
                magnitude,
                self.charge_magnitude
            );
        }
        self
    }

    /// Set the orbit step per tick
    pub fn with_angular_step(mut self, step: f32) -> Self {
        self.rotation = RotationUpdater::new(step);
        self
    }

    /// Limit the number of charges (clamped to [`MAX_CHARGES`](crate::MAX_CHARGES))
    pub fn with_max_charges(mut self, max: usize) -> Self {
        self.charges = ChargeStore::with_capacity(max);
        self
    }

    /// Set whether charge markers start visible
    pub fn with_markers_visible(mut self, visible: bool) -> Self {
        self.show_markers = visible;
        self
    }

    /// Place a charge at a screen-space point
    ///
    /// Returns the index of the new charge, or `CapacityExceeded` when the
    /// store is full, in which case nothing changes.
    pub fn add_charge(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        polarity: Polarity,
    ) -> Result<usize, ChargeError> {
        let position = self.table.screen_to_table(screen_x, screen_y);
        let charge = Charge::with_polarity(position, polarity, self.charge_magnitude);
        self.charges.push(charge)
    }

    /// Advance all charges one step along their orbits
    pub fn tick(&mut self) {
        self.rotation.tick(&mut self.charges);
    }

    /// Flip marker visibility, returning the new value
    pub fn toggle_markers(&mut self) -> bool {
        self.show_markers = !self.show_markers;
        self.show_markers
    }

    /// Recompute the table height for a new canvas size
    pub fn resize(&mut self, canvas_width: u32, canvas_height: u32) -> bool {
        self.table.resize(canvas_width, canvas_height)
    }

    #[inline]
    pub fn show_markers(&self) -> bool {
        self.show_markers
    }

    #[inline]
    pub fn charges(&self) -> &ChargeStore {
        &self.charges
    }

    #[inline]
    pub fn table(&self) -> &TableSpace {
        &self.table
    }

    #[inline]
    pub fn rotation(&self) -> &RotationUpdater {
        &self.rotation
    }

    #[inline]
    pub fn charge_magnitude(&self) -> f32 {
        self.charge_magnitude
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(TableSpace::default())
    }
}
