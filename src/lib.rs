#![no_std]

pub mod components;
pub mod datatypes;
pub mod hal;

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub use components::{Button, Led, PinError};
pub use datatypes::pin::{DigitalState, MAX_PIN, PinDirection, PinId};
pub use hal::DigitalIo;
