//! Desktop preview app for myrtio-star-composer
//!
//! Draws the star with its spines laid out radially and plays the animation
//! at the configured frame rate.

use std::f32::consts::TAU;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_star_composer::{
    ChannelId, ColorField, Compositor, LED_COUNT, Rgb, StarConfig, config::FRAME_SCALE,
};
use smart_leds::brightness;

/// Radius of each LED circle in pixels
const LED_RADIUS: f32 = 4.0;

/// Distance between two LEDs along a spine
const LED_PITCH: f32 = 11.0;

/// Empty space around the center of the star
const CENTER_GAP: f32 = 24.0;

/// Gap between the outgoing and returning run of a spine
const LANE_GAP: f32 = 5.0;

const CHANNELS: [ChannelId; 8] = [
    ChannelId::Rotate,
    ChannelId::Triangle,
    ChannelId::Streak,
    ChannelId::Sawtooth,
    ChannelId::Square,
    ChannelId::Sine,
    ChannelId::Full,
    ChannelId::Off,
];

fn main() -> eframe::Result<()> {
    let config = StarConfig::DEFAULT;
    let compositor = Compositor::new(&config)
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 900.0])
            .with_title("Star Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-star-preview",
        options,
        Box::new(move |_cc| Ok(Box::new(PreviewApp::new(config, compositor)))),
    )
}

struct PreviewApp {
    /// Active configuration
    config: StarConfig,
    /// The compositor instance
    compositor: Compositor<LED_COUNT>,

    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Milliseconds not yet turned into ticks
    pending_ms: f64,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Scale applied to every frame, as the hardware would
    scale: u8,
}

impl PreviewApp {
    fn new(config: StarConfig, compositor: Compositor<LED_COUNT>) -> Self {
        Self {
            compositor,
            config,
            last_frame: StdInstant::now(),
            pending_ms: 0.0,
            playing: true,
            time_scale: 1.0,
            scale: FRAME_SCALE,
        }
    }

    /// Rebind channels, keeping the current tick
    ///
    /// The layout was validated in `main` and does not change here.
    fn rebuild(&mut self) {
        let field = ColorField::from_ids(
            self.config.layout,
            self.config.hue,
            self.config.saturation,
            self.config.lightness,
        );
        if let Ok(mut compositor) = Compositor::with_field(self.config.layout, field) {
            compositor.set_tick(self.compositor.tick());
            self.compositor = compositor;
        }
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.compositor.set_tick(0);
        self.pending_ms = 0.0;
        self.last_frame = StdInstant::now();
    }

    /// Advance the tick counter by the elapsed wall clock time
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if !self.playing {
            return;
        }

        #[allow(clippy::cast_precision_loss)]
        let frame_ms = self.config.frame_delay.as_millis().max(1) as f64;
        self.pending_ms += delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
        while self.pending_ms >= frame_ms {
            self.pending_ms -= frame_ms;
            self.compositor.advance();
        }
    }

    fn channel_selector(ui: &mut egui::Ui, label: &str, channel: &mut ChannelId) -> bool {
        let before = *channel;
        ui.horizontal(|ui| {
            ui.label(label);
            egui::ComboBox::from_id_salt(label)
                .selected_text(channel.as_str())
                .show_ui(ui, |ui| {
                    for id in CHANNELS {
                        ui.selectable_value(channel, id, id.as_str());
                    }
                });
        });
        *channel != before
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let layout = self.compositor.layout();
        let frame: Vec<Rgb> =
            brightness(self.compositor.render().iter().copied(), self.scale).collect();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        if !self.playing && ui.button("⏭ Step").clicked() {
                            self.compositor.advance();
                        }
                    });

                    ui.add_space(4.0);
                    ui.label(format!("Tick: {}", self.compositor.tick()));

                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <ChannelControls>
                ui.vertical(|ui| {
                    let mut changed = Self::channel_selector(ui, "Hue:", &mut self.config.hue);
                    changed |= Self::channel_selector(ui, "Saturation:", &mut self.config.saturation);
                    changed |= Self::channel_selector(ui, "Lightness:", &mut self.config.lightness);
                    if changed {
                        self.rebuild();
                    }

                    ui.horizontal(|ui| {
                        ui.label("Scale:");
                        ui.add(egui::DragValue::new(&mut self.scale).range(0u8..=255u8));
                    });
                });
                // </ChannelControls>
            });

            ui.add_space(16.0);

            // === Star Display ===
            let spine_len = f32::from(layout.half_spine()) * LED_PITCH;
            let size = 2.0 * (CENTER_GAP + spine_len + LED_PITCH);
            let (response, painter) =
                ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
            let center = response.rect.center();
            painter.rect_filled(response.rect, 8.0, egui::Color32::from_gray(12));

            let spines = layout.spines();
            for i in 0..layout.slot_count() {
                let slot = layout.slot(i);
                let angle = TAU * f32::from(slot.spine) / f32::from(spines);
                let direction = egui::vec2(angle.cos(), angle.sin());
                let normal = egui::vec2(-direction.y, direction.x);
                let radius = CENTER_GAP + f32::from(slot.idx) * LED_PITCH;

                for (position, side) in [
                    (layout.forward_position(slot), -1.0),
                    (layout.mirrored_position(slot), 1.0),
                ] {
                    let pixel = frame[position];
                    let point = center + direction * radius + normal * (side * LANE_GAP);
                    painter.circle_filled(
                        point,
                        LED_RADIUS,
                        egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b),
                    );
                }
            }
        });
    }
}
