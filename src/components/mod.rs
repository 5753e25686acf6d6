use thiserror::Error;

use crate::datatypes::pin::{MAX_PIN, PinId};

pub mod button;
pub mod led;

pub use button::Button;
pub use led::Led;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    #[error("pin {0} exceeds the maximum pin handle {max}", max = MAX_PIN)]
    InvalidPin(PinId),
}

pub(crate) fn check_pin(pin: PinId) -> Result<PinId, PinError> {
    if pin <= MAX_PIN {
        Ok(pin)
    } else {
        Err(PinError::InvalidPin(pin))
    }
}
