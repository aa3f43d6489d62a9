//! Output drivers.
//!
//! The frame loop only talks to [`OutputDriver`]. [`SmartLedsOutput`] plugs
//! any `smart-leds` compatible strip driver into it.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness};

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame loop is generic over this trait.
pub trait OutputDriver {
    /// Prepare the strip for `led_count` LEDs. Called once before the first
    /// frame.
    fn init(&mut self, _led_count: usize) {}

    /// Write colors to the LED strip
    ///
    /// `scale` is the global brightness hint for this frame (0-255).
    fn write(&mut self, colors: &[Rgb], scale: u8);
}

/// Output driver backed by a [`SmartLedsWrite`] implementation
///
/// Transmission errors are logged and dropped; the next frame overwrites the
/// strip anyway.
pub struct SmartLedsOutput<W> {
    writer: W,
    led_count: Option<usize>,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            led_count: None,
        }
    }

    /// Give back the wrapped driver
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn init(&mut self, led_count: usize) {
        self.led_count = Some(led_count);
    }

    fn write(&mut self, colors: &[Rgb], scale: u8) {
        if self.led_count.is_some_and(|count| count != colors.len()) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[SmartLedsOutput.write] skipping frame of {} LEDs, expected {:?}",
                colors.len(),
                self.led_count
            );
            return;
        }

        let pixels = brightness(colors.iter().copied(), scale);
        if self.writer.write(pixels).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write frame");
        }
    }
}
