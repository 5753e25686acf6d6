#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a digital I/O line on the board.
pub type PinId = u8;

/// Largest pin handle the drivers accept at bind time.
pub const MAX_PIN: PinId = 127;

/// Logical level of a digital line. High is the asserted level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitalState {
    #[default]
    Low = 0,
    High = 1,
}

impl DigitalState {
    pub fn is_high(self) -> bool {
        self == DigitalState::High
    }

    pub fn is_low(self) -> bool {
        self == DigitalState::Low
    }
}

impl From<bool> for DigitalState {
    fn from(asserted: bool) -> Self {
        if asserted {
            DigitalState::High
        } else {
            DigitalState::Low
        }
    }
}

impl From<DigitalState> for bool {
    fn from(state: DigitalState) -> Self {
        state == DigitalState::High
    }
}

/// Direction a line is configured with at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Input,
    Output,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_conversions() {
        assert_eq!(DigitalState::from(true), DigitalState::High);
        assert_eq!(DigitalState::from(false), DigitalState::Low);
        assert!(bool::from(DigitalState::High));
        assert!(!bool::from(DigitalState::Low));
    }

    #[test]
    fn test_level_queries() {
        assert!(DigitalState::High.is_high());
        assert!(!DigitalState::High.is_low());
        assert!(DigitalState::Low.is_low());
    }
}
