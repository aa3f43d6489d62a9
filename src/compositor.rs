#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Tick;
use crate::color::{Rgb, hsv2rgb};
use crate::config::StarConfig;
use crate::error::ConfigError;
use crate::field::ColorField;
use crate::layout::StripLayout;

/// Frame compositor - owns the frame buffer and the animation clock
///
/// N is the number of LEDs in the strip
pub struct Compositor<const N: usize> {
    layout: StripLayout,
    field: ColorField,

    // Internal state
    tick: Tick,
    frame_buffer: [Rgb; N],
}

impl<const N: usize> Compositor<N> {
    /// Create a compositor with the channels named in the config
    pub fn new(config: &StarConfig) -> Result<Self, ConfigError> {
        let field = ColorField::from_ids(
            config.layout,
            config.hue,
            config.saturation,
            config.lightness,
        );
        Self::with_field(config.layout, field)
    }

    /// Create a compositor with a custom color field
    pub fn with_field(layout: StripLayout, field: ColorField) -> Result<Self, ConfigError> {
        layout.validate(N)?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Compositor.new] {} spines x {} LEDs",
            layout.spines(),
            layout.leds_per_spine()
        );

        Ok(Self {
            layout,
            field,
            tick: 0,
            frame_buffer: [Rgb::default(); N],
        })
    }

    /// Compose the frame for the current tick
    ///
    /// Every slot is sampled once and written to both of its LEDs.
    pub fn render(&mut self) -> &[Rgb] {
        let t = self.tick;
        for i in 0..self.layout.slot_count() {
            let slot = self.layout.slot(i);
            let color = hsv2rgb(self.field.sample(t, slot.spine, slot.idx));

            self.frame_buffer[self.layout.forward_position(slot)] = color;
            self.frame_buffer[self.layout.mirrored_position(slot)] = color;
        }

        &self.frame_buffer
    }

    /// Move the animation one tick forward
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Jump to an arbitrary tick
    pub fn set_tick(&mut self, tick: Tick) {
        self.tick = tick;
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn layout(&self) -> StripLayout {
        self.layout
    }

    pub fn field(&self) -> &ColorField {
        &self.field
    }

    /// Last composed frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }
}
