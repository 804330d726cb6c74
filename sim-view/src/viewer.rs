//! Interactive waterfall viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! (waterfall, configuration, timing) and implements [`eframe::App`]
//! to render and control the stream through an egui UI.

use eframe::App;
use glam::Vec2;
use rand::rng;
use sim_core::{
    config::Config,
    phases,
    surface::{Rgba, Surface},
    waterfall::Waterfall,
};

/// Canvas fill behind the stream.
const BACKGROUND: egui::Color32 = egui::Color32::BLACK;

/// Panel size assumed before the first frame has laid out the canvas.
const DEFAULT_PANEL: Vec2 = Vec2::new(800.0, 600.0);

/// Converts a surface-local position to egui screen-space.
///
/// The canvas uses the same orientation as the surface (y grows down),
/// so the mapping is a pure translation by the panel origin.
fn surface_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
    rect.min + egui::vec2(p.x, p.y)
}

/// Converts an egui pointer position to surface-local coordinates,
/// floored to whole units.
fn pointer_to_surface(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new((p.x - rect.min.x).floor(), (p.y - rect.min.y).floor())
}

/// Converts a simulation color to an egui color, clamping alpha into
/// `[0, 1]` before scaling it to a byte.
fn to_color32(c: Rgba) -> egui::Color32 {
    let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

/// [`Surface`] implementation over an egui painter clipped to the
/// canvas rect.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl Surface for PainterSurface<'_> {
    fn width(&self) -> f32 {
        self.rect.width()
    }

    fn height(&self) -> f32 {
        self.rect.height()
    }

    fn clear(&mut self) {
        self.painter
            .rect_filled(self.rect, egui::CornerRadius::ZERO, BACKGROUND);
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(surface_to_screen(center, self.rect), radius, to_color32(color));
    }

    fn line(&mut self, a: Vec2, b: Vec2, color: Rgba) {
        self.painter.line_segment(
            [
                surface_to_screen(a, self.rect),
                surface_to_screen(b, self.rect),
            ],
            egui::Stroke::new(1.0, to_color32(color)),
        );
    }
}

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Waterfall`] and [`Config`].
/// - UI state (run/pause, tick timing, last known canvas size).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions / input (pointer press retargets the
///    waypoint).
/// 2. If `running` is `true` and enough time has passed, advance and
///    repaint via [`Waterfall::tick`]; otherwise repaint the current
///    state via [`Waterfall::render`].
///
/// ### Fields
/// - `waterfall` - Particle stream being simulated.
/// - `cfg` - Global simulation configuration (gravity, attraction,
///   spawn settings).
///
/// - `rng` - Random number generator used for respawn positions.
///
/// - `running` - Whether the simulation is currently auto-advancing.
///
/// - `tick_interval` - Target time between automatic ticks (seconds).
/// - `last_tick_time` - Time stamp of the last tick (egui time).
/// - `last_tick_dt` - Actual time delta between the last two ticks (for
///   display only).
///
/// - `panel_size` - Canvas size observed on the last frame; used when
///   rebuilding the waterfall.
pub struct Viewer {
    waterfall: Waterfall,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    running: bool,

    tick_interval: f64,
    last_tick_time: f64,
    last_tick_dt: f64,

    panel_size: Vec2,
}

impl Viewer {
    /// Creates a new viewer with a freshly seeded stream.
    ///
    /// The default setup is:
    /// - [`Config::default`] for simulation parameters.
    /// - A waterfall sized for the default panel, particles spread over
    ///   the full column.
    /// - Auto-run enabled at a 24 ms tick.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to
    /// `eframe::run_native`.
    pub fn new() -> Self {
        let mut rng = rng();
        let cfg = Config::default();
        let waterfall = Waterfall::new(&cfg, DEFAULT_PANEL, &mut rng);

        log::info!("seeded waterfall with {} particles", cfg.particle_count);

        Self {
            waterfall,
            cfg,
            rng,
            running: true,
            tick_interval: 0.024,
            last_tick_time: 0.0,
            last_tick_dt: 0.0,
            panel_size: DEFAULT_PANEL,
        }
    }

    /// Rebuilds the waterfall from the current configuration and the
    /// last observed canvas size.
    ///
    /// Structural parameters (`particle_count`, `trail_len`,
    /// `band_width`, `particle_radius`) only take effect through this
    /// path; the motion parameters apply live.
    fn reset(&mut self) {
        self.waterfall = Waterfall::new(&self.cfg, self.panel_size, &mut self.rng);
        self.last_tick_time = 0.0;
        self.last_tick_dt = 0.0;

        log::info!(
            "reset waterfall: {} particles over {}x{}",
            self.cfg.particle_count,
            self.panel_size.x,
            self.panel_size.y
        );
    }

    /// Advances the simulation by a single step without painting.
    ///
    /// The central panel repaints the new state on the same frame, so
    /// stepping while paused still shows the result immediately.
    fn step_once(&mut self) {
        phases::move_phase(
            &mut self.waterfall,
            &self.cfg,
            self.panel_size.y,
            &mut self.rng,
        );
    }

    /// Helper to draw a labeled `usize` [`egui::DragValue`].
    fn labeled_drag_usize(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut usize,
        range: std::ops::RangeInclusive<usize>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                ui.add(
                    egui::DragValue::new(&mut self.tick_interval)
                        .prefix("dt target = ")
                        .range(0.001..=1.0)
                        .speed(0.01),
                );

                if ui.button("Step").clicked() {
                    let now = ctx.input(|i| i.time);
                    if self.last_tick_time > 0.0 {
                        self.last_tick_dt = now - self.last_tick_time;
                    }
                    self.step_once();
                    self.last_tick_time = now;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (tick timing, particle count, waypoint).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("dt target = {:.3} s", self.tick_interval));
                ui.label(format!("dt last = {:.3} s", self.last_tick_dt));
                ui.separator();
                ui.label(format!("particles = {}", self.waterfall.particles.len()));
                let wp = self.waterfall.waypoint();
                ui.label(format!("waypoint = ({:.0}, {:.0})", wp.x, wp.y));
            });
        });
    }

    /// Builds the right-hand configuration panel for simulation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Motion");
                Self::labeled_drag_f32(ui, "gravity.x:", &mut self.cfg.gravity.x, -2.0..=2.0, 0.01);
                Self::labeled_drag_f32(ui, "gravity.y:", &mut self.cfg.gravity.y, -2.0..=2.0, 0.01);
                Self::labeled_drag_f32(
                    ui,
                    "attraction:",
                    &mut self.cfg.attraction,
                    0.0..=5000.0,
                    10.0,
                );
                Self::labeled_drag_f32(ui, "max_steer:", &mut self.cfg.max_steer, 0.0..=5.0, 0.01);

                ui.separator();
                ui.label("Stream (applied on Reset)");
                Self::labeled_drag_usize(
                    ui,
                    "particle_count:",
                    &mut self.cfg.particle_count,
                    1..=5000,
                    1.0,
                );
                Self::labeled_drag_usize(ui, "trail_len:", &mut self.cfg.trail_len, 0..=50, 1.0);
                Self::labeled_drag_f32(
                    ui,
                    "band_width:",
                    &mut self.cfg.band_width,
                    10.0..=2000.0,
                    5.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "particle_radius:",
                    &mut self.cfg.particle_radius,
                    0.5..=10.0,
                    0.1,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                }
            });
    }

    /// Builds the central panel where the stream is drawn and the
    /// waypoint is retargeted with the pointer.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            self.panel_size = Vec2::new(rect.width(), rect.height());

            // Press or drag anywhere on the canvas retargets the stream.
            if response.is_pointer_button_down_on()
                && let Some(p) = response.interact_pointer_pos()
            {
                self.waterfall.set_waypoint(pointer_to_surface(p, rect));
            }

            let mut surface = PainterSurface {
                painter: &painter,
                rect,
            };

            if self.running {
                let now = ctx.input(|i| i.time);
                let elapsed = now - self.last_tick_time;
                if elapsed >= self.tick_interval {
                    if self.last_tick_time > 0.0 {
                        self.last_tick_dt = elapsed;
                    }
                    self.waterfall.tick(&self.cfg, &mut self.rng, &mut surface);
                    self.last_tick_time = now;
                } else {
                    // Repaint between ticks without advancing.
                    self.waterfall.render(&mut surface);
                }

                ctx.request_repaint();
            } else {
                self.waterfall.render(&mut surface);
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the top control bar and status bar.
    /// - Renders the config side panel.
    /// - Draws the central stream view and handles interactions.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}
