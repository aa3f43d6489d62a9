//! Hue rotation around the spines
//!
//! Every spine gets an equal share of the color wheel. The whole wheel
//! shifts by one spine every `period` ticks, so a full turn takes
//! `period * spines` ticks.

use super::Field;
use crate::{
    Tick,
    config::{MAX, ROTATE_LENGTH, SPINE_COUNT},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateField {
    /// Ticks per one-spine shift
    period: u16,
    /// Number of spines sharing the wheel
    spines: u8,
}

impl Default for RotateField {
    fn default() -> Self {
        Self::new(SPINE_COUNT)
    }
}

impl RotateField {
    pub const fn new(spines: u8) -> Self {
        Self {
            period: ROTATE_LENGTH,
            spines,
        }
    }

    /// Set the number of ticks per one-spine shift
    #[must_use]
    pub const fn with_period(mut self, period: u16) -> Self {
        self.period = period;
        self
    }
}

impl Field for RotateField {
    #[allow(clippy::cast_possible_truncation)]
    fn value(&self, t: Tick, spine: u8, _idx: u8) -> u8 {
        let period = u32::from(self.period.max(1));
        let spines = u32::from(self.spines.max(1));
        let step = u32::from(t) / period + u32::from(spine);

        (step * u32::from(MAX) / spines % u32::from(MAX)) as u8
    }
}
