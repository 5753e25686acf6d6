use defmt_or_log::{debug, trace};

use crate::datatypes::pin::{DigitalState, PinDirection, PinId};
use crate::hal::DigitalIo;

use super::{PinError, check_pin};

/// Single LED driven through a digital output line.
///
/// Tracks the last commanded level so the owning loop can query
/// [`Led::is_on`] without touching the hardware.
#[derive(Debug, Clone, Default)]
pub struct Led {
    pin: PinId,
    state: DigitalState,
}

impl Led {
    /// Creates an LED not yet bound to a pin. [`Led::bind`] must be called
    /// before [`Led::set_state`] is used.
    pub fn new() -> Self {
        Led::default()
    }

    /// Creates an LED bound to `pin`.
    pub fn bound(pin: PinId, io: &mut impl DigitalIo) -> Result<Self, PinError> {
        let mut led = Led::new();
        led.bind(pin, io)?;
        Ok(led)
    }

    /// Binds the LED to `pin`, configures the line as an output and resets
    /// the tracked state to low, so [`Led::is_on`] is consistent before the
    /// first [`Led::set_state`] call. Binding again rebinds to the new pin.
    pub fn bind(&mut self, pin: PinId, io: &mut impl DigitalIo) -> Result<(), PinError> {
        self.pin = check_pin(pin)?;
        self.state = DigitalState::Low;
        io.pin_mode(self.pin, PinDirection::Output);

        debug!("led bound to pin {}", pin);
        Ok(())
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }

    /// Stores `state` and drives the line to it. The write is performed on
    /// every call, including repeats of the current value.
    pub fn set_state(&mut self, state: DigitalState, io: &mut impl DigitalIo) {
        self.state = state;
        io.write(self.pin, self.state);

        trace!("led pin {} set high={}", self.pin, self.state.is_high());
    }

    /// True if the last commanded level was high.
    pub fn is_on(&self) -> bool {
        self.state == DigitalState::High
    }
}
