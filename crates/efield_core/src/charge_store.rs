//! Bounded collection of charges
//!
//! Charges are only ever appended; there is no removal. Once the store is
//! full every further push is rejected and the contents stay untouched.

use crate::{Charge, ChargeError};

/// Maximum number of charges the field shader can take
pub const MAX_CHARGES: usize = 20;

/// Ordered, append-only collection of charges with a fixed capacity
#[derive(Clone, Debug)]
pub struct ChargeStore {
    charges: Vec<Charge>,
    capacity: usize,
}

impl Default for ChargeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChargeStore {
    /// Create an empty store holding up to [`MAX_CHARGES`]
    pub fn new() -> Self {
        Self::with_capacity(MAX_CHARGES)
    }

    /// Create an empty store with a smaller capacity
    ///
    /// Capacities above [`MAX_CHARGES`] are clamped.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CHARGES);
        Self {
            charges: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a charge, returning its index
    pub fn push(&mut self, charge: Charge) -> Result<usize, ChargeError> {
        if self.is_full() {
            return Err(ChargeError::CapacityExceeded { max: self.capacity });
        }
        let index = self.charges.len();
        self.charges.push(charge);
        Ok(index)
    }

    /// Get a charge by index
    pub fn get(&self, index: usize) -> Option<&Charge> {
        self.charges.get(index)
    }

    /// All charges as a slice
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    /// All charges as a mutable slice (positions are updated in place)
    pub fn charges_mut(&mut self) -> &mut [Charge] {
        &mut self.charges
    }

    /// Iterate over charges in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Charge> {
        self.charges.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.charges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    /// Maximum number of charges this store accepts
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.charges.len() >= self.capacity
    }
}
