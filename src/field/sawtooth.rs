use super::Field;
use crate::{Tick, config::SPINE_COUNT};

/// Rising ramp over the full byte range
///
/// Each spine starts `spread` steps ahead of the previous one, so a
/// sawtooth hue shows every spine on a different part of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SawtoothField {
    /// Ticks per step of the ramp
    period: u16,
    /// Phase shift between neighbouring spines
    spread: u8,
}

impl Default for SawtoothField {
    fn default() -> Self {
        Self::new(1, u8::MAX / SPINE_COUNT)
    }
}

impl SawtoothField {
    pub const fn new(period: u16, spread: u8) -> Self {
        Self { period, spread }
    }
}

impl Field for SawtoothField {
    #[allow(clippy::cast_possible_truncation)]
    fn value(&self, t: Tick, spine: u8, _idx: u8) -> u8 {
        let phase = (t / self.period.max(1)) as u8;
        phase.wrapping_add(spine.wrapping_mul(self.spread))
    }
}
