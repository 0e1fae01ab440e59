//! Orbit animation for charges
//!
//! Every tick each charge moves along a circle around the table origin:
//! positive charges counter-clockwise, negative charges clockwise.

use crate::ChargeStore;

/// Default angular step per tick, in radians
pub const DEFAULT_ANGULAR_STEP: f32 = 0.01;

/// Advances charge positions along their orbits
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationUpdater {
    /// Angle added (positive charges) or subtracted (negative charges) per tick
    pub angular_step: f32,
}

impl Default for RotationUpdater {
    fn default() -> Self {
        Self::new(DEFAULT_ANGULAR_STEP)
    }
}

impl RotationUpdater {
    pub fn new(angular_step: f32) -> Self {
        Self { angular_step }
    }

    /// Signed step for a charge of the given magnitude
    #[inline]
    pub fn step_for(&self, magnitude: f32) -> f32 {
        if magnitude > 0.0 {
            self.angular_step
        } else {
            -self.angular_step
        }
    }

    /// Advance every charge by one step
    ///
    /// The radius is kept; a charge sitting exactly on the origin has angle 0
    /// and radius 0, so it stays put.
    pub fn tick(&self, store: &mut ChargeStore) {
        for charge in store.charges_mut() {
            let delta = self.step_for(charge.magnitude);
            charge.position = charge.position.rotated(delta);
        }
    }
}
