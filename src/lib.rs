#![no_std]

pub mod color;
pub mod compositor;
pub mod config;
pub mod driver;
pub mod error;
pub mod field;
pub mod frame_loop;
pub mod layout;

pub use compositor::Compositor;
pub use config::{LED_COUNT, StarConfig};
pub use driver::{OutputDriver, SmartLedsOutput};
pub use error::ConfigError;
pub use field::{ChannelId, ChannelSlot, ColorField, Field};
pub use frame_loop::FrameLoop;
pub use layout::{Slot, StripLayout};

pub use color::{Hsv, Rgb};
pub use embassy_time::Duration;

/// Animation clock, one step per frame. Wraps around on overflow.
pub type Tick = u16;
