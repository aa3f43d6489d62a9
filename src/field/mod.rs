//! Color field system with compile-time known channel variants
//!
//! Each color channel (hue, saturation, lightness) is driven by its own
//! field: a pure function of the tick and the slot. Fields are stored in an
//! enum to avoid heap allocations and are bound once when the
//! [`ColorField`] is built.

mod constant;
mod rotate;
mod sawtooth;
mod sine;
mod square;
mod streak;
mod triangle;

pub use constant::ConstantField;
pub use rotate::RotateField;
pub use sawtooth::SawtoothField;
pub use sine::SineField;
pub use square::SquareField;
pub use streak::StreakField;
pub use triangle::TriangleField;

use crate::{Tick, color::Hsv, layout::StripLayout};

const CHANNEL_NAME_ROTATE: &str = "rotate";
const CHANNEL_NAME_TRIANGLE: &str = "triangle";
const CHANNEL_NAME_STREAK: &str = "streak";
const CHANNEL_NAME_FULL: &str = "full";
const CHANNEL_NAME_OFF: &str = "off";
const CHANNEL_NAME_SAWTOOTH: &str = "sawtooth";
const CHANNEL_NAME_SQUARE: &str = "square";
const CHANNEL_NAME_SINE: &str = "sine";

const CHANNEL_ID_ROTATE: u8 = 0;
const CHANNEL_ID_TRIANGLE: u8 = 1;
const CHANNEL_ID_STREAK: u8 = 2;
const CHANNEL_ID_FULL: u8 = 3;
const CHANNEL_ID_OFF: u8 = 4;
const CHANNEL_ID_SAWTOOTH: u8 = 5;
const CHANNEL_ID_SQUARE: u8 = 6;
const CHANNEL_ID_SINE: u8 = 7;

pub trait Field {
    /// Channel value for one slot at tick `t`
    fn value(&self, t: Tick, spine: u8, idx: u8) -> u8;
}

/// Channel slot - enum containing all possible fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelSlot {
    /// Rotates around the spines over time
    Rotate(RotateField),
    /// Triangle wave over time
    Triangle(TriangleField),
    /// Bands travelling along each spine
    Streak(StreakField),
    /// Fixed value
    Constant(ConstantField),
    /// Rising ramp, shifted per spine
    Sawtooth(SawtoothField),
    /// On/off wave
    Square(SquareField),
    /// Smooth sine wave
    Sine(SineField),
}

/// Known channel ids that can be bound to a color channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelId {
    Rotate = CHANNEL_ID_ROTATE,
    Triangle = CHANNEL_ID_TRIANGLE,
    Streak = CHANNEL_ID_STREAK,
    Full = CHANNEL_ID_FULL,
    Off = CHANNEL_ID_OFF,
    Sawtooth = CHANNEL_ID_SAWTOOTH,
    Square = CHANNEL_ID_SQUARE,
    Sine = CHANNEL_ID_SINE,
}

impl ChannelId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            CHANNEL_ID_ROTATE => Self::Rotate,
            CHANNEL_ID_TRIANGLE => Self::Triangle,
            CHANNEL_ID_STREAK => Self::Streak,
            CHANNEL_ID_FULL => Self::Full,
            CHANNEL_ID_OFF => Self::Off,
            CHANNEL_ID_SAWTOOTH => Self::Sawtooth,
            CHANNEL_ID_SQUARE => Self::Square,
            CHANNEL_ID_SINE => Self::Sine,
            _ => return None,
        })
    }

    /// Build the field with its default tuning for `layout`
    pub fn to_slot(self, layout: StripLayout) -> ChannelSlot {
        match self {
            Self::Rotate => ChannelSlot::Rotate(RotateField::new(layout.spines())),
            Self::Triangle => ChannelSlot::Triangle(TriangleField::default()),
            Self::Streak => ChannelSlot::Streak(StreakField::default()),
            Self::Full => ChannelSlot::Constant(ConstantField::new(u8::MAX)),
            Self::Off => ChannelSlot::Constant(ConstantField::new(0)),
            Self::Sawtooth => ChannelSlot::Sawtooth(SawtoothField::new(
                1,
                u8::MAX / layout.spines().max(1),
            )),
            Self::Square => ChannelSlot::Square(SquareField::default()),
            Self::Sine => ChannelSlot::Sine(SineField::default()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rotate => CHANNEL_NAME_ROTATE,
            Self::Triangle => CHANNEL_NAME_TRIANGLE,
            Self::Streak => CHANNEL_NAME_STREAK,
            Self::Full => CHANNEL_NAME_FULL,
            Self::Off => CHANNEL_NAME_OFF,
            Self::Sawtooth => CHANNEL_NAME_SAWTOOTH,
            Self::Square => CHANNEL_NAME_SQUARE,
            Self::Sine => CHANNEL_NAME_SINE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CHANNEL_NAME_ROTATE => Some(Self::Rotate),
            CHANNEL_NAME_TRIANGLE => Some(Self::Triangle),
            CHANNEL_NAME_STREAK => Some(Self::Streak),
            CHANNEL_NAME_FULL => Some(Self::Full),
            CHANNEL_NAME_OFF => Some(Self::Off),
            CHANNEL_NAME_SAWTOOTH => Some(Self::Sawtooth),
            CHANNEL_NAME_SQUARE => Some(Self::Square),
            CHANNEL_NAME_SINE => Some(Self::Sine),
            _ => None,
        }
    }
}

impl ChannelSlot {
    /// Channel value for one slot at tick `t`
    pub fn value(&self, t: Tick, spine: u8, idx: u8) -> u8 {
        match self {
            Self::Rotate(field) => field.value(t, spine, idx),
            Self::Triangle(field) => field.value(t, spine, idx),
            Self::Streak(field) => field.value(t, spine, idx),
            Self::Constant(field) => field.value(t, spine, idx),
            Self::Sawtooth(field) => field.value(t, spine, idx),
            Self::Square(field) => field.value(t, spine, idx),
            Self::Sine(field) => field.value(t, spine, idx),
        }
    }
}

/// Hue, saturation and lightness sources of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorField {
    hue: ChannelSlot,
    saturation: ChannelSlot,
    lightness: ChannelSlot,
}

impl ColorField {
    pub const fn new(hue: ChannelSlot, saturation: ChannelSlot, lightness: ChannelSlot) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Bind named channels with their default tuning
    pub fn from_ids(
        layout: StripLayout,
        hue: ChannelId,
        saturation: ChannelId,
        lightness: ChannelId,
    ) -> Self {
        Self::new(
            hue.to_slot(layout),
            saturation.to_slot(layout),
            lightness.to_slot(layout),
        )
    }

    pub fn hue(&self, t: Tick, spine: u8, idx: u8) -> u8 {
        self.hue.value(t, spine, idx)
    }

    pub fn saturation(&self, t: Tick, spine: u8, idx: u8) -> u8 {
        self.saturation.value(t, spine, idx)
    }

    pub fn lightness(&self, t: Tick, spine: u8, idx: u8) -> u8 {
        self.lightness.value(t, spine, idx)
    }

    /// Sample all three channels for one slot
    pub fn sample(&self, t: Tick, spine: u8, idx: u8) -> Hsv {
        Hsv {
            hue: self.hue(t, spine, idx),
            sat: self.saturation(t, spine, idx),
            val: self.lightness(t, spine, idx),
        }
    }
}
