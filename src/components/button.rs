use defmt_or_log::{debug, trace};

use crate::datatypes::pin::{DigitalState, PinDirection, PinId};
use crate::hal::DigitalIo;

use super::{PinError, check_pin};

/// Momentary push-button sampled from a single digital input line.
///
/// The owning control loop calls [`Button::update`] once per iteration and
/// then inspects [`Button::is_pressed`] and [`Button::has_switched_state`].
/// A transition is visible for exactly one poll cycle.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pin: PinId,
    state: DigitalState,
    previous_state: DigitalState,
}

impl Button {
    /// Creates a button not yet bound to a pin. [`Button::bind`] must be
    /// called before the sampling operations are used.
    pub fn new() -> Self {
        Button::default()
    }

    /// Creates a button bound to `pin`.
    pub fn bound(pin: PinId, io: &mut impl DigitalIo) -> Result<Self, PinError> {
        let mut button = Button::new();
        button.bind(pin, io)?;
        Ok(button)
    }

    /// Binds the button to `pin` and configures the line as an input.
    /// Binding again rebinds to the new pin.
    pub fn bind(&mut self, pin: PinId, io: &mut impl DigitalIo) -> Result<(), PinError> {
        self.pin = check_pin(pin)?;
        io.pin_mode(self.pin, PinDirection::Input);

        debug!("button bound to pin {}", pin);
        Ok(())
    }

    /// Samples the line into the current state.
    pub fn sample_current(&mut self, io: &mut impl DigitalIo) {
        self.state = io.read(self.pin);
        trace!("button pin {} sampled high={}", self.pin, self.state.is_high());
    }

    /// Copies the current state into the previous state. No I/O.
    pub fn sample_previous(&mut self) {
        self.previous_state = self.state;
    }

    /// Advances one poll cycle. The previous state is captured before the
    /// line is sampled; reversing the order would erase every transition.
    pub fn update(&mut self, io: &mut impl DigitalIo) {
        self.sample_previous();
        self.sample_current(io);
    }

    /// True while the sampled line is high.
    pub fn is_pressed(&self) -> bool {
        self.state == DigitalState::High
    }

    /// True if the two most recent samples differ.
    pub fn has_switched_state(&self) -> bool {
        self.state != self.previous_state
    }

    pub fn pin(&self) -> PinId {
        self.pin
    }
}
