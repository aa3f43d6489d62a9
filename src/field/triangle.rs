use super::Field;
use crate::{
    Tick,
    config::{MAX, TRIANGLE_LENGTH},
};

/// Triangle wave over time, same for every LED
///
/// Folds a sawtooth around zero: full at the start of each period, dips to
/// its minimum halfway and climbs back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleField {
    /// Ticks per step of the wave
    period: u16,
}

impl Default for TriangleField {
    fn default() -> Self {
        Self::new(TRIANGLE_LENGTH)
    }
}

impl TriangleField {
    pub const fn new(period: u16) -> Self {
        Self { period }
    }
}

impl Field for TriangleField {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn value(&self, t: Tick, _spine: u8, _idx: u8) -> u8 {
        let phase = t / self.period.max(1) % u16::from(MAX);
        // -255..=253, does not fit i8
        let folded = phase as i16 * 2 - i16::from(MAX);

        folded.unsigned_abs() as u8
    }
}
