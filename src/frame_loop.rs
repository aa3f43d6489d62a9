//! Frame loop: compose, push, advance, sleep.
//!
//! The loop owns the compositor, the output driver and the pacing delay.
//! Pacing is a fixed pause after every frame; there is no catch-up.

use embassy_time::{Duration, Timer};
use embedded_hal::delay::DelayNs;

use crate::compositor::Compositor;
use crate::config::StarConfig;
use crate::driver::OutputDriver;
use crate::error::ConfigError;

/// Endless animation loop over one strip.
///
/// # Usage
///
/// ```ignore
/// let mut frames = FrameLoop::<_, _, LED_COUNT>::new(
///     &StarConfig::DEFAULT,
///     SmartLedsOutput::new(ws2812),
///     embassy_time::Delay,
/// )?;
/// frames.run();
/// ```
pub struct FrameLoop<O: OutputDriver, P: DelayNs, const N: usize> {
    compositor: Compositor<N>,
    output: O,
    pacer: P,
    frame_delay: Duration,
    scale: u8,
}

impl<O: OutputDriver, P: DelayNs, const N: usize> FrameLoop<O, P, N> {
    /// Validate the config and initialize the output driver.
    pub fn new(config: &StarConfig, output: O, pacer: P) -> Result<Self, ConfigError> {
        let compositor = Compositor::new(config)?;
        Ok(Self::with_compositor(
            compositor,
            output,
            pacer,
            config.frame_delay,
            config.scale,
        ))
    }

    /// Build a loop around an existing compositor.
    pub fn with_compositor(
        compositor: Compositor<N>,
        mut output: O,
        pacer: P,
        frame_delay: Duration,
        scale: u8,
    ) -> Self {
        output.init(N);
        Self {
            compositor,
            output,
            pacer,
            frame_delay,
            scale,
        }
    }

    /// Compose the current frame, push it to the driver and advance time.
    pub fn frame(&mut self) {
        let frame = self.compositor.render();
        self.output.write(frame, self.scale);
        self.compositor.advance();
    }

    /// One full iteration: [`FrameLoop::frame`] followed by the frame delay.
    #[allow(clippy::cast_possible_truncation)]
    pub fn step(&mut self) {
        self.frame();
        let delay_ms = self.frame_delay.as_millis().min(u64::from(u32::MAX)) as u32;
        self.pacer.delay_ms(delay_ms);
    }

    /// Run forever with the blocking pacer.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Run forever, yielding to the executor between frames.
    pub async fn run_async(&mut self) -> ! {
        loop {
            self.frame();
            Timer::after(self.frame_delay).await;
        }
    }

    pub fn compositor(&self) -> &Compositor<N> {
        &self.compositor
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }
}
