//! Simulation system
//!
//! Advances the charges once per frame and applies placement and toggle
//! actions. The orbit is a fixed step per frame, so there is no delta time.

use efield_core::{ChargeError, Polarity, SimulationState};

/// Drives the simulation state between frames
#[derive(Debug, Default)]
pub struct SimulationSystem;

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self
    }

    /// Run one simulation frame
    pub fn update(&self, state: &mut SimulationState) {
        state.tick();
    }

    /// Place a charge at a screen position
    ///
    /// A full store is not an error for the user; the click is logged and
    /// dropped.
    pub fn place_charge(
        &self,
        state: &mut SimulationState,
        x: f32,
        y: f32,
        polarity: Polarity,
    ) -> Option<usize> {
        match state.add_charge(x, y, polarity) {
            Ok(index) => {
                let charge = &state.charges().charges()[index];
                log::info!(
                    "Placed {:?} charge #{} at ({:.3}, {:.3})",
                    polarity,
                    index + 1,
                    charge.position.x,
                    charge.position.y
                );
                Some(index)
            }
            Err(e @ ChargeError::CapacityExceeded { .. }) => {
                log::info!("{}", e);
                None
            }
        }
    }

    /// Show or hide the charge markers
    pub fn toggle_markers(&self, state: &mut SimulationState) -> bool {
        let visible = state.toggle_markers();
        log::info!("Charge markers: {}", if visible { "ON" } else { "OFF" });
        visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use efield_core::TableSpace;

    fn state() -> SimulationState {
        SimulationState::new(TableSpace::new(3.0, 1000, 500))
    }

    #[test]
    fn test_update_moves_charges() {
        let sim = SimulationSystem::default();
        let mut state = state();
        sim.place_charge(&mut state, 600.0, 250.0, Polarity::Positive);
        let before = state.charges().charges()[0].position;

        sim.update(&mut state);
        assert_ne!(state.charges().charges()[0].position, before);
    }

    #[test]
    fn test_update_keeps_origin_charge() {
        let sim = SimulationSystem::new();
        let mut state = state();
        sim.place_charge(&mut state, 500.0, 250.0, Polarity::Negative);

        sim.update(&mut state);
        assert_eq!(state.charges().charges()[0].position.length(), 0.0);
    }

    #[test]
    fn test_place_charge_when_full() {
        let sim = SimulationSystem::new();
        let mut state = state().with_max_charges(2);
        assert_eq!(sim.place_charge(&mut state, 0.0, 0.0, Polarity::Positive), Some(0));
        assert_eq!(sim.place_charge(&mut state, 1.0, 1.0, Polarity::Negative), Some(1));
        assert_eq!(sim.place_charge(&mut state, 2.0, 2.0, Polarity::Positive), None);
        assert_eq!(state.charges().len(), 2);
    }

    #[test]
    fn test_toggle_markers() {
        let sim = SimulationSystem::new();
        let mut state = state();
        assert!(!sim.toggle_markers(&mut state));
        assert!(sim.toggle_markers(&mut state));
    }
}
