//! Streaks chasing along the spines
//!
//! A band of `length` LEDs ramps from dark to full brightness and moves one
//! LED outward per tick. The band repeats every `cycle` LEDs, and each spine
//! is shifted by `stagger` so the streaks appear to circle around the star.

use super::Field;
use crate::{
    Tick,
    config::{MAX, STREAK_CYCLE, STREAK_LENGTH, STREAK_OFFSET},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakField {
    /// Width of the lit band
    length: u8,
    /// Distance between two bands
    cycle: u8,
    /// Phase shift between neighbouring spines
    stagger: u8,
}

impl Default for StreakField {
    fn default() -> Self {
        Self {
            length: STREAK_LENGTH,
            cycle: STREAK_CYCLE,
            stagger: STREAK_OFFSET,
        }
    }
}

impl StreakField {
    pub const fn new(length: u8, cycle: u8, stagger: u8) -> Self {
        Self {
            length,
            cycle,
            stagger,
        }
    }

    /// Position of the slot inside its streak cycle, in `0..cycle`
    ///
    /// Uses the flooring remainder: the offset goes negative as time
    /// advances and must still land inside the cycle.
    pub fn phase(&self, t: Tick, spine: u8, idx: u8) -> u8 {
        let offset = i32::from(idx) - i32::from(t) - 1 + i32::from(spine) * i32::from(self.stagger);
        let cycle = i32::from(self.cycle.max(1));

        u8::try_from(offset.rem_euclid(cycle)).unwrap_or(u8::MAX)
    }
}

impl Field for StreakField {
    #[allow(clippy::cast_possible_truncation)]
    fn value(&self, t: Tick, spine: u8, idx: u8) -> u8 {
        let length = u16::from(self.length.max(1));
        let phase = u16::from(self.phase(t, spine, idx));
        // Dark until the phase reaches the band, then ramp up to full
        let ramp = (phase + 1).saturating_sub(length).min(length);

        (ramp * u16::from(MAX) / length) as u8
    }
}
