use alloc::vec::Vec;

use crate::datatypes::pin::{DigitalState, PinDirection, PinId};

use super::DigitalIo;

/// Simulated digital-I/O provider backing `N` pins.
///
/// A test harness scripts input levels with [`SimDigitalIo::set_level`] and
/// inspects the ordered write journal afterwards. Repeated identical writes
/// are journaled individually, so suppressed writes are visible as gaps.
///
/// All accesses panic if `pin >= N`.
#[derive(Debug)]
pub struct SimDigitalIo<const N: usize> {
    levels: [DigitalState; N],
    directions: [Option<PinDirection>; N],
    writes: Vec<(PinId, DigitalState)>,
}

impl<const N: usize> SimDigitalIo<N> {
    pub fn new() -> Self {
        SimDigitalIo {
            levels: [DigitalState::Low; N],
            directions: [None; N],
            writes: Vec::new(),
        }
    }

    /// Sets the level the line will carry on subsequent reads.
    pub fn set_level(&mut self, pin: PinId, state: DigitalState) {
        self.levels[pin as usize] = state;
    }

    pub fn level(&self, pin: PinId) -> DigitalState {
        self.levels[pin as usize]
    }

    /// Direction the line was last configured with, if any.
    pub fn direction(&self, pin: PinId) -> Option<PinDirection> {
        self.directions[pin as usize]
    }

    /// Every write performed so far, oldest first.
    pub fn writes(&self) -> &[(PinId, DigitalState)] {
        &self.writes
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

impl<const N: usize> Default for SimDigitalIo<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DigitalIo for SimDigitalIo<N> {
    fn pin_mode(&mut self, pin: PinId, direction: PinDirection) {
        self.directions[pin as usize] = Some(direction);
    }

    fn read(&mut self, pin: PinId) -> DigitalState {
        self.levels[pin as usize]
    }

    fn write(&mut self, pin: PinId, state: DigitalState) {
        self.levels[pin as usize] = state;
        self.writes.push((pin, state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_default_low() {
        let mut io = SimDigitalIo::<4>::new();
        assert_eq!(io.read(0), DigitalState::Low);
        assert_eq!(io.read(3), DigitalState::Low);
        assert_eq!(io.direction(0), None);
    }

    #[test]
    fn test_scripted_levels() {
        let mut io = SimDigitalIo::<4>::new();

        io.set_level(1, DigitalState::High);
        assert_eq!(io.read(1), DigitalState::High);
        assert_eq!(io.read(0), DigitalState::Low);

        io.set_level(1, DigitalState::Low);
        assert_eq!(io.read(1), DigitalState::Low);
    }

    #[test]
    fn test_write_journal_keeps_order_and_duplicates() {
        let mut io = SimDigitalIo::<8>::new();

        io.write(5, DigitalState::High);
        io.write(5, DigitalState::High);
        io.write(2, DigitalState::Low);

        assert_eq!(
            io.writes(),
            [
                (5, DigitalState::High),
                (5, DigitalState::High),
                (2, DigitalState::Low),
            ]
        );

        io.clear_writes();
        assert!(io.writes().is_empty());
    }

    #[test]
    fn test_write_drives_the_line() {
        let mut io = SimDigitalIo::<8>::new();

        io.write(5, DigitalState::High);
        assert_eq!(io.read(5), DigitalState::High);
        assert_eq!(io.level(5), DigitalState::High);
    }

    #[test]
    fn test_pin_mode_recorded() {
        let mut io = SimDigitalIo::<8>::new();

        io.pin_mode(2, PinDirection::Input);
        io.pin_mode(5, PinDirection::Output);

        assert_eq!(io.direction(2), Some(PinDirection::Input));
        assert_eq!(io.direction(5), Some(PinDirection::Output));
        assert_eq!(io.direction(3), None);
    }
}
