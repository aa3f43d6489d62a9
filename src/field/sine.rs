//! Smooth sine wave
//!
//! One cycle spans 256 steps. The wave is centered on 128 and reaches 255
//! a quarter cycle in and 0 three quarters in.

use core::f32::consts::TAU;

use super::Field;
use crate::Tick;

const STEPS_PER_CYCLE: f32 = 256.0;
const AMPLITUDE: f32 = 127.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SineField {
    /// Ticks per step of the wave
    period: u16,
    /// Phase shift between neighbouring spines
    spread: u8,
}

impl Default for SineField {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl SineField {
    pub const fn new(period: u16, spread: u8) -> Self {
        Self { period, spread }
    }
}

impl Field for SineField {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn value(&self, t: Tick, spine: u8, _idx: u8) -> u8 {
        let phase = ((t / self.period.max(1)) as u8).wrapping_add(spine.wrapping_mul(self.spread));
        let angle = TAU * f32::from(phase) / STEPS_PER_CYCLE;
        let value = libm::roundf(AMPLITUDE + AMPLITUDE * libm::sinf(angle));

        value.clamp(0.0, 255.0) as u8
    }
}
