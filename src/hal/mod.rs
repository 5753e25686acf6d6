use crate::datatypes::pin::{DigitalState, PinDirection, PinId};

pub mod sim;

/// Platform digital-I/O primitives the drivers are built on.
///
/// Every call is a synchronous, bounded-time hardware access keyed by a raw
/// pin handle. Pin handles are trusted at this boundary; what happens on an
/// unconfigured or out-of-range pin is up to the implementation.
pub trait DigitalIo {
    fn pin_mode(&mut self, pin: PinId, direction: PinDirection);

    fn read(&mut self, pin: PinId) -> DigitalState;

    fn write(&mut self, pin: PinId, state: DigitalState);
}
