//! Error types for charge placement

use std::fmt;

/// Errors that can occur when placing a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeError {
    /// The store already holds its maximum number of charges
    CapacityExceeded {
        /// The capacity that was reached
        max: usize,
    },
}

impl fmt::Display for ChargeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeError::CapacityExceeded { max } => {
                write!(f, "Charge limit reached ({} charges)", max)
            }
        }
    }
}

impl std::error::Error for ChargeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ChargeError::CapacityExceeded { max: 20 };
        assert_eq!(err.to_string(), "Charge limit reached (20 charges)");
    }
}
