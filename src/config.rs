//! Build-time configuration of the star.
//!
//! The constants describe the physical star and the default tuning of each
//! color channel. [`StarConfig`] bundles them into the value the compositor
//! and frame loop are constructed from.

use embassy_time::Duration;

use crate::{field::ChannelId, layout::StripLayout};

/// Number of radial spines
pub const SPINE_COUNT: u8 = 12;

/// Number of LEDs on one spine (both directions)
pub const SPINE_LED_LENGTH: u8 = 32;

/// Total number of LEDs on the strip
pub const LED_COUNT: usize = SPINE_COUNT as usize * SPINE_LED_LENGTH as usize;

/// Delay between frames in milliseconds
pub const TIME_DELAY: u64 = 25;

/// Maximum value of a color channel
pub const MAX: u8 = 255;

/// Ticks per hue step of the rotation
pub const ROTATE_LENGTH: u16 = 8;

/// Width of the bright band of a streak
pub const STREAK_LENGTH: u8 = 10;

/// Ticks between two streaks passing the same LED
pub const STREAK_CYCLE: u8 = 20;

/// Phase shift between neighbouring spines
pub const STREAK_OFFSET: u8 = 7;

/// Spread of streak widths. Reserved: the fixed-width streak ignores it.
pub const STREAK_VARIANCE: u8 = 2;

/// Ticks per step of the saturation triangle wave
pub const TRIANGLE_LENGTH: u16 = 2;

/// Scale handed to the driver with every frame
pub const FRAME_SCALE: u8 = 128;

/// Configuration of the star renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarConfig {
    pub layout: StripLayout,
    pub hue: ChannelId,
    pub saturation: ChannelId,
    pub lightness: ChannelId,
    /// Pause between two frames
    pub frame_delay: Duration,
    /// Scale hint passed to the output driver on every push
    pub scale: u8,
}

impl StarConfig {
    /// Twelve spines of 32 LEDs with rotating hue, pulsing saturation and
    /// chasing streaks.
    pub const DEFAULT: Self = Self {
        layout: StripLayout::new(SPINE_COUNT, SPINE_LED_LENGTH),
        hue: ChannelId::Rotate,
        saturation: ChannelId::Triangle,
        lightness: ChannelId::Streak,
        frame_delay: Duration::from_millis(TIME_DELAY),
        scale: FRAME_SCALE,
    };
}

impl Default for StarConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
