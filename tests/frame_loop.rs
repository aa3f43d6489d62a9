mod tests {
    use core::future::Future;
    use core::pin::pin;
    use core::task::{Context, Waker};

    use embedded_hal::delay::DelayNs;
    use myrtio_star_composer::{
        Compositor, ConfigError, Duration, FrameLoop, LED_COUNT, OutputDriver, Rgb,
        SmartLedsOutput, StarConfig, StripLayout, config::FRAME_SCALE,
    };
    use smart_leds::SmartLedsWrite;

    const RED: Rgb = Rgb { r: 200, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 80 };

    /// Keeps a copy of every pushed frame
    #[derive(Default)]
    struct RecordingDriver {
        inits: Vec<usize>,
        frames: Vec<Vec<Rgb>>,
        scales: Vec<u8>,
    }

    impl OutputDriver for RecordingDriver {
        fn init(&mut self, led_count: usize) {
            self.inits.push(led_count);
        }

        fn write(&mut self, colors: &[Rgb], scale: u8) {
            self.frames.push(colors.to_vec());
            self.scales.push(scale);
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        delays_ms: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.delays_ms.push(ms);
        }
    }

    /// Minimal `smart-leds` strip
    #[derive(Default)]
    struct MockStrip {
        written: Vec<Rgb>,
        writes: usize,
        fail: bool,
    }

    impl SmartLedsWrite for MockStrip {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.written = iterator.into_iter().map(Into::into).collect();
            self.writes += 1;
            if self.fail { Err(()) } else { Ok(()) }
        }
    }

    fn frame_loop() -> FrameLoop<RecordingDriver, RecordingDelay, LED_COUNT> {
        FrameLoop::new(
            &StarConfig::DEFAULT,
            RecordingDriver::default(),
            RecordingDelay::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_initializes_driver_once() {
        let mut frames = frame_loop();
        assert_eq!(frames.output().inits, [LED_COUNT]);
        frames.step();
        frames.step();
        assert_eq!(frames.output().inits, [LED_COUNT]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = StarConfig {
            layout: StripLayout::new(12, 30),
            ..StarConfig::DEFAULT
        };
        let result = FrameLoop::<_, _, LED_COUNT>::new(
            &config,
            RecordingDriver::default(),
            RecordingDelay::default(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::LedCountMismatch { .. })
        ));
    }

    #[test]
    fn test_step_pushes_one_frame_per_tick() {
        let mut frames = frame_loop();
        for _ in 0..25 {
            frames.step();
        }

        let output = frames.output();
        assert_eq!(output.frames.len(), 25);
        assert!(output.frames.iter().all(|frame| frame.len() == LED_COUNT));
        assert!(output.scales.iter().all(|&scale| scale == FRAME_SCALE));
        assert_eq!(frames.pacer().delays_ms, [25; 25]);
        assert_eq!(frames.compositor().tick(), 25);
    }

    #[test]
    fn test_pushed_frames_follow_ticks() {
        let mut frames = frame_loop();
        for _ in 0..5 {
            frames.frame();
        }
        assert!(frames.pacer().delays_ms.is_empty());

        let mut reference = Compositor::<LED_COUNT>::new(&StarConfig::DEFAULT).unwrap();
        for pushed in &frames.output().frames {
            assert_eq!(pushed.as_slice(), reference.render());
            reference.advance();
        }
    }

    #[test]
    fn test_run_async_paces_frames() {
        let mut frames = frame_loop();
        {
            let mut running = pin!(frames.run_async());
            let mut cx = Context::from_waker(Waker::noop());
            let started = std::time::Instant::now();
            while started.elapsed() < std::time::Duration::from_millis(260) {
                assert!(running.as_mut().poll(&mut cx).is_pending());
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
        }

        // First frame at once, then one per 25 ms
        let output = frames.output();
        let pushed = output.frames.len();
        assert!((5..=11).contains(&pushed), "pushed {pushed} frames");
        assert!(output.frames.iter().all(|frame| frame.len() == LED_COUNT));
        assert_eq!(usize::from(frames.compositor().tick()), pushed);
        assert!(frames.pacer().delays_ms.is_empty());
    }

    #[test]
    fn test_custom_delay_and_scale() {
        let config = StarConfig {
            frame_delay: Duration::from_millis(40),
            scale: 7,
            ..StarConfig::DEFAULT
        };
        let mut frames = FrameLoop::<_, _, LED_COUNT>::new(
            &config,
            RecordingDriver::default(),
            RecordingDelay::default(),
        )
        .unwrap();
        frames.step();
        assert_eq!(frames.output().scales, [7]);
        assert_eq!(frames.pacer().delays_ms, [40]);
    }

    #[test]
    fn test_smart_leds_output_scales_frame() {
        let mut output = SmartLedsOutput::new(MockStrip::default());
        output.init(2);

        output.write(&[RED, BLUE], 255);
        output.write(&[RED, BLUE], 0);
        let strip = output.into_inner();
        assert_eq!(strip.writes, 2);
        assert_eq!(strip.written, [Rgb::default(), Rgb::default()]);

        let mut output = SmartLedsOutput::new(MockStrip::default());
        output.init(2);
        output.write(&[RED, BLUE], 255);
        assert_eq!(output.into_inner().written, [RED, BLUE]);
    }

    #[test]
    fn test_smart_leds_output_skips_wrong_length() {
        let mut output = SmartLedsOutput::new(MockStrip::default());
        output.init(3);
        output.write(&[RED, BLUE], 255);
        assert_eq!(output.into_inner().writes, 0);
    }

    #[test]
    fn test_smart_leds_output_ignores_write_errors() {
        let strip = MockStrip {
            fail: true,
            ..MockStrip::default()
        };
        let mut frames = FrameLoop::<_, _, LED_COUNT>::new(
            &StarConfig::DEFAULT,
            SmartLedsOutput::new(strip),
            RecordingDelay::default(),
        )
        .unwrap();
        frames.step();
        frames.step();
        assert_eq!(frames.compositor().tick(), 2);
    }
}
