use super::Field;
use crate::Tick;

/// On/off wave with a configurable duty cycle
///
/// Off for the first `duty` steps of every 256, on for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareField {
    /// Ticks per step of the wave
    period: u16,
    /// Number of dark steps per cycle
    duty: u8,
}

impl Default for SquareField {
    fn default() -> Self {
        Self::new(1, 128)
    }
}

impl SquareField {
    pub const fn new(period: u16, duty: u8) -> Self {
        Self { period, duty }
    }
}

impl Field for SquareField {
    #[allow(clippy::cast_possible_truncation)]
    fn value(&self, t: Tick, _spine: u8, _idx: u8) -> u8 {
        let phase = (t / self.period.max(1)) as u8;
        if phase < self.duty { 0 } else { u8::MAX }
    }
}
