//! Point charges

use efield_math::Vec2;

/// Default absolute magnitude of a placed charge
///
/// Stylistic scale, chosen so that the field near a charge saturates the
/// segment length without being a physical calibration.
pub const DEFAULT_CHARGE_MAGNITUDE: f32 = 4.0e-12;

/// Sign of a charge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Counter-clockwise orbit, field points away from the charge
    Positive,
    /// Clockwise orbit, field points toward the charge
    Negative,
}

impl Polarity {
    /// Pick the polarity for a click, negative when the modifier is held
    #[inline]
    pub fn from_modifier(negative_held: bool) -> Self {
        if negative_held {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }

    /// Apply this polarity to an absolute magnitude
    #[inline]
    pub fn signed(self, magnitude: f32) -> f32 {
        match self {
            Polarity::Positive => magnitude.abs(),
            Polarity::Negative => -magnitude.abs(),
        }
    }
}

/// A point charge in table space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Charge {
    /// Position in table space
    pub position: Vec2,
    /// Signed magnitude; the sign drives orbit direction and field polarity
    pub magnitude: f32,
}

impl Charge {
    /// Create a new charge
    pub fn new(position: Vec2, magnitude: f32) -> Self {
        Self { position, magnitude }
    }

    /// Create a charge with the given polarity and absolute magnitude
    pub fn with_polarity(position: Vec2, polarity: Polarity, magnitude: f32) -> Self {
        Self::new(position, polarity.signed(magnitude))
    }

    /// Polarity derived from the sign of the magnitude
    #[inline]
    pub fn polarity(&self) -> Polarity {
        if self.magnitude > 0.0 {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}
