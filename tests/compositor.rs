mod tests {
    use myrtio_star_composer::{
        ChannelId, ChannelSlot, ColorField, Compositor, ConfigError, LED_COUNT, Rgb,
        StarConfig, StripLayout,
        color::hsv2rgb,
        field::{ConstantField, StreakField},
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn compositor() -> Compositor<LED_COUNT> {
        Compositor::new(&StarConfig::DEFAULT).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_buffer_size() {
        let result = Compositor::<100>::new(&StarConfig::DEFAULT);
        assert!(matches!(
            result,
            Err(ConfigError::LedCountMismatch {
                expected: 384,
                actual: 100
            })
        ));
    }

    #[test]
    fn test_new_rejects_odd_spines() {
        let config = StarConfig {
            layout: StripLayout::new(4, 5),
            ..StarConfig::DEFAULT
        };
        assert!(matches!(
            Compositor::<20>::new(&config),
            Err(ConfigError::OddSpineLength(5))
        ));
    }

    #[test]
    fn test_render_matches_field() {
        let mut compositor = compositor();
        compositor.set_tick(1_234);
        let layout = compositor.layout();
        let field = *compositor.field();
        let frame = compositor.render().to_vec();

        assert_eq!(frame.len(), LED_COUNT);
        for i in 0..layout.slot_count() {
            let slot = layout.slot(i);
            let expected = hsv2rgb(field.sample(1_234, slot.spine, slot.idx));
            assert_eq!(frame[layout.forward_position(slot)], expected);
        }
    }

    #[test]
    fn test_render_is_mirrored() {
        let mut compositor = compositor();
        for _ in 0..64 {
            let layout = compositor.layout();
            let frame = compositor.render().to_vec();
            for i in 0..layout.slot_count() {
                let slot = layout.slot(i);
                assert_eq!(
                    frame[layout.forward_position(slot)],
                    frame[layout.mirrored_position(slot)]
                );
            }
            compositor.advance();
        }
    }

    #[test]
    fn test_render_overwrites_every_led() {
        let layout = StripLayout::new(3, 4);
        let lit = ColorField::new(
            ChannelSlot::Constant(ConstantField::new(0)),
            ChannelSlot::Constant(ConstantField::new(0)),
            ChannelSlot::Constant(ConstantField::new(200)),
        );
        let mut compositor = Compositor::<12>::with_field(layout, lit).unwrap();
        let frame = compositor.render();
        assert!(frame.iter().all(|&led| led != BLACK));

        let dark = ColorField::from_ids(layout, ChannelId::Rotate, ChannelId::Full, ChannelId::Off);
        let mut compositor = Compositor::<12>::with_field(layout, dark).unwrap();
        let frame = compositor.render();
        assert!(frame.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_streak_is_mirrored_on_spine() {
        let layout = StripLayout::new(1, 8);
        let field = ColorField::new(
            ChannelSlot::Constant(ConstantField::new(0)),
            ChannelSlot::Constant(ConstantField::new(0)),
            ChannelSlot::Streak(StreakField::new(2, 4, 0)),
        );
        let mut compositor = Compositor::<8>::with_field(layout, field).unwrap();
        let frame = compositor.render().to_vec();
        let lit: Vec<bool> = frame.iter().map(|&led| led != BLACK).collect();

        // Phases at tick 0 are 3, 0, 1, 2 for the four slots
        assert_eq!(
            lit,
            [true, false, false, true, true, false, false, true]
        );
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut compositor = compositor();
        assert_eq!(compositor.tick(), 0);
        compositor.advance();
        compositor.advance();
        assert_eq!(compositor.tick(), 2);

        compositor.set_tick(u16::MAX);
        compositor.advance();
        assert_eq!(compositor.tick(), 0);
    }

    #[test]
    fn test_render_does_not_advance() {
        let mut compositor = compositor();
        let first = compositor.render().to_vec();
        let second = compositor.render().to_vec();
        assert_eq!(first, second);
        assert_eq!(compositor.tick(), 0);
        assert_eq!(compositor.frame(), &second[..]);
    }
}
