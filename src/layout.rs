//! Spine layout of the star.
//!
//! Every spine is a contiguous run of LEDs that goes out from the center and
//! comes back. One logical slot drives two LEDs of the same spine: the one at
//! `idx` from the spine start and the one at `idx` from the spine end.

use crate::error::ConfigError;

/// Logical half-spine position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub spine: u8,
    pub idx: u8,
}

/// Shape of the LED strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLayout {
    spines: u8,
    leds_per_spine: u8,
}

impl StripLayout {
    /// Create a layout. Call [`StripLayout::validate`] before rendering.
    pub const fn new(spines: u8, leds_per_spine: u8) -> Self {
        Self {
            spines,
            leds_per_spine,
        }
    }

    pub const fn spines(self) -> u8 {
        self.spines
    }

    pub const fn leds_per_spine(self) -> u8 {
        self.leds_per_spine
    }

    /// Number of LEDs on the strip
    pub const fn total_leds(self) -> usize {
        self.spines as usize * self.leds_per_spine as usize
    }

    /// Number of slots on one spine
    pub const fn half_spine(self) -> u8 {
        self.leds_per_spine / 2
    }

    /// Number of slots on the strip
    pub const fn slot_count(self) -> usize {
        self.total_leds() / 2
    }

    /// Check the layout against a frame of `led_count` LEDs
    pub const fn validate(self, led_count: usize) -> Result<(), ConfigError> {
        if self.spines == 0 {
            return Err(ConfigError::NoSpines);
        }
        if self.leds_per_spine == 0 {
            return Err(ConfigError::EmptySpine);
        }
        if !self.leds_per_spine.is_multiple_of(2) {
            return Err(ConfigError::OddSpineLength(self.leds_per_spine));
        }
        if self.total_leds() != led_count {
            return Err(ConfigError::LedCountMismatch {
                expected: self.total_leds(),
                actual: led_count,
            });
        }
        Ok(())
    }

    /// Slot for the logical index `i` in `0..slot_count()`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn slot(self, i: usize) -> Slot {
        let half = if self.half_spine() == 0 {
            1
        } else {
            self.half_spine() as usize
        };
        Slot {
            spine: (i / half) as u8,
            idx: (i % half) as u8,
        }
    }

    /// Physical position of the slot counted from the spine start
    pub const fn forward_position(self, slot: Slot) -> usize {
        slot.spine as usize * self.leds_per_spine as usize + slot.idx as usize
    }

    /// Physical position of the slot counted from the spine end
    pub const fn mirrored_position(self, slot: Slot) -> usize {
        (slot.spine as usize + 1) * self.leds_per_spine as usize - 1 - slot.idx as usize
    }
}
