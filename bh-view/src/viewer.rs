//! Interactive black-hole particle animation built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the animation state
//! (attractor, particle pool, pointer tracking, configuration) and
//! implements [`eframe::App`] to drive the frame loop.

use bh_core::{
    attractor::Attractor,
    color::Hsla,
    config::Config,
    particle::Particle,
    phases,
    pointer::PointerState,
    trail::Trail,
    types::Viewport,
};
use glam::Vec2;
use rand::rng;

/// Number of segments used to tessellate the attractor's glow ring.
const GLOW_SEGMENTS: usize = 64;

/// Dark wash painted over the whole canvas before each frame's content.
/// Its 85% opacity is the complement of `Config::trail_retention`: the
/// per-particle trails reproduce what this wash would leave behind on an
/// accumulating surface.
const TRAIL_FADE: egui::Color32 = egui::Color32::from_rgba_premultiplied(6, 6, 6, 217);

/// Main application state for the animation.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Attractor`], the particle pool, [`PointerState`],
///   [`Config`].
/// - eframe/egui callbacks for input, drawing and the frame loop.
///
/// The per-frame update is:
/// 1. Sample the egui clock and pointer, resolve the chase target.
/// 2. Recenter the attractor if the canvas changed size.
/// 3. Run the core phases: populate, respawn, step.
/// 4. Paint: dark wash, fading particle trails, live particle dots, then
///    the attractor (stepped last so it renders on top with this frame's
///    target).
///
/// ### Fields
/// - `particles` - Fixed-limit pool, grown incrementally at startup.
/// - `attractor` - The single pull source for every particle.
/// - `pointer` - Hover state feeding the attractor's target.
/// - `cfg` - Tuning constants for pull, pool size, cooldowns, trails.
///
/// - `rng` - Random number generator for spawn edges, colors, cooldowns.
///
/// - `last_spawn` - Time of the previous ramp-up addition (egui time).
/// - `last_viewport` - Canvas size from the previous frame, for resize
///   detection; `None` until the first frame.
///
/// - `last_frame_time` - Time stamp of the previous frame (egui time).
/// - `frame_dt` - Time delta between the last two frames (display only).
pub struct Viewer {
    particles: Vec<Particle>,
    attractor: Attractor,
    pointer: PointerState,
    cfg: Config,

    rng: rand::rngs::ThreadRng,

    last_spawn: f64,
    last_viewport: Option<Viewport>,

    last_frame_time: f64,
    frame_dt: f64,
}

impl Viewer {
    /// Creates a new viewer with an empty pool and a centered attractor.
    ///
    /// The viewport is unknown until the first frame, so the attractor is
    /// centered on a nominal 800x600 canvas; the resize check in
    /// [`Viewer::ui_central_panel`] recenters it as soon as the real
    /// canvas rect is available.
    pub fn new() -> Self {
        let cfg = Config::default();
        let viewport = Viewport::new(800.0, 600.0);

        Self {
            particles: Vec::with_capacity(cfg.particle_limit),
            attractor: Attractor::new(viewport, &cfg),
            pointer: PointerState::new(viewport),
            cfg,
            rng: rng(),
            last_spawn: f64::NEG_INFINITY,
            last_viewport: None,
            last_frame_time: 0.0,
            frame_dt: 0.0,
        }
    }

    /// Converts a canvas-space position (origin at the canvas top-left)
    /// to egui screen-space.
    fn canvas_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        rect.min + egui::vec2(p.x, p.y)
    }

    /// Converts an egui screen-space position to canvas-space.
    ///
    /// Inverse of [`Viewer::canvas_to_screen`].
    fn screen_to_canvas(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
    }

    /// Tessellates the attractor's glow as a triangle-strip ring.
    ///
    /// The inner ring (at the core radius) carries the attractor's current
    /// glow color; the outer ring (core radius + glow thickness) is fully
    /// transparent, so the GPU interpolates a radial-gradient falloff.
    fn glow_mesh(&self, center: egui::Pos2) -> egui::Mesh {
        let inner_r = self.attractor.core_radius;
        let outer_r = inner_r + self.attractor.glow_thickness;

        let [r, g, b, a] = self.attractor.glow_color().to_rgba();
        let inner_color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
        let outer_color = egui::Color32::TRANSPARENT;

        use std::f32::consts::TAU;
        let mut mesh = egui::Mesh::default();
        for i in 0..=GLOW_SEGMENTS {
            let t = (i as f32) / (GLOW_SEGMENTS as f32) * TAU;
            let dir = egui::vec2(t.cos(), t.sin());
            mesh.colored_vertex(center + dir * inner_r, inner_color);
            mesh.colored_vertex(center + dir * outer_r, outer_color);
        }
        for i in 0..GLOW_SEGMENTS {
            let base = (i * 2) as u32;
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base + 1, base + 3, base + 2);
        }
        mesh
    }

    /// Draws the attractor: gradient glow ring first, then the opaque
    /// black core disk on top.
    fn render_attractor(&self, painter: &egui::Painter, rect: egui::Rect) {
        let center = Self::canvas_to_screen(self.attractor.pos, rect);
        painter.add(egui::Shape::mesh(self.glow_mesh(center)));
        painter.circle_filled(center, self.attractor.core_radius, egui::Color32::BLACK);
    }

    /// Draws every particle's fading trail, then the active dots on top.
    ///
    /// Trail slots are dimmed by `trail_retention^age`, so a dot left on
    /// a previous frame lingers at a fraction of its brightness instead of
    /// vanishing with the repaint. Captured particles keep no live dot but
    /// their leftover trail still burns out over a few frames.
    fn render_particles(&self, painter: &egui::Painter, rect: egui::Rect) {
        for p in &self.particles {
            for slot in p.trail.iter() {
                let alpha = p.color.a * Trail::brightness(self.cfg.trail_retention, slot.age);
                let [r, g, b, a] = Hsla::new(p.color.h, p.color.s, p.color.l, alpha).to_rgba();
                if a == 0 {
                    continue;
                }
                painter.circle_filled(
                    Self::canvas_to_screen(slot.pos, rect),
                    self.cfg.particle_radius,
                    egui::Color32::from_rgba_unmultiplied(r, g, b, a),
                );
            }
        }

        for p in self.particles.iter().filter(|p| !p.is_resetting()) {
            let [r, g, b, a] = p.color.to_rgba();
            painter.circle_filled(
                Self::canvas_to_screen(p.pos, rect),
                self.cfg.particle_radius,
                egui::Color32::from_rgba_unmultiplied(r, g, b, a),
            );
        }
    }

    /// Builds the bottom status bar (frame timing and pool occupancy).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.frame_dt > 0.0 {
                    ui.label(format!("{:.0} fps", 1.0 / self.frame_dt));
                    ui.label(format!("frame = {:.1} ms", self.frame_dt * 1000.0));
                }
                ui.separator();
                let resetting = self.particles.iter().filter(|p| p.is_resetting()).count();
                ui.label(format!(
                    "particles = {} ({} resetting)",
                    self.particles.len(),
                    resetting
                ));
            });
        });
    }

    /// Builds the central canvas: samples input, runs the simulation
    /// phases, and paints the frame.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                let viewport = Viewport::new(rect.width(), rect.height());
                let now = ctx.input(|i| i.time);

                // A resize moves the screen center, so the attractor snaps
                // back to it (also covers the very first frame).
                if self.last_viewport != Some(viewport) {
                    self.attractor.recenter(viewport);
                    self.last_viewport = Some(viewport);
                }

                // Pointer tracking: hover doubles as enter/leave.
                match response.hover_pos() {
                    Some(p) => {
                        self.pointer.enter();
                        self.pointer.moved(Self::screen_to_canvas(p, rect));
                    }
                    None => self.pointer.leave(viewport),
                }
                let target = self.pointer.target(viewport);

                // Simulation phases: ramp-up, cooldown respawns, then step
                // every particle against this frame's attractor position.
                phases::populate_phase(
                    &mut self.particles,
                    &mut self.last_spawn,
                    now,
                    viewport,
                    &self.cfg,
                    &mut self.rng,
                );
                phases::respawn_phase(&mut self.particles, now, viewport, &mut self.rng);

                painter.rect_filled(rect, egui::CornerRadius::ZERO, TRAIL_FADE);

                phases::step_phase(
                    &mut self.particles,
                    &self.attractor,
                    viewport,
                    &self.cfg,
                    now,
                    &mut self.rng,
                );
                self.render_particles(&painter, rect);

                // The attractor moves after every particle has been
                // stepped, then renders on top.
                self.attractor.step(target, viewport, &self.cfg);
                self.render_attractor(&painter, rect);

                // Keep the animation running at display refresh rate.
                ctx.request_repaint();
            });
    }
}

impl eframe::App for Viewer {
    /// eframe callback that advances and draws one frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        if self.last_frame_time > 0.0 {
            self.frame_dt = now - self.last_frame_time;
        }
        self.last_frame_time = now;

        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn canvas_to_screen_and_back_is_roundtrip() {
        let rect = test_rect();

        let canvas_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(400.0, 300.0),
            Vec2::new(-1.0, 599.0),
        ];

        for p in canvas_points {
            let screen = Viewer::canvas_to_screen(p, rect);
            let back = Viewer::screen_to_canvas(screen, rect);
            assert_eq!(back, p);
        }
    }

    #[test]
    fn canvas_origin_maps_to_rect_corner() {
        let rect = test_rect();
        let screen = Viewer::canvas_to_screen(Vec2::ZERO, rect);
        assert_eq!(screen, rect.min);
    }

    #[test]
    fn new_viewer_starts_empty_and_centered() {
        let viewer = Viewer::new();

        assert!(viewer.particles.is_empty());
        assert!(!viewer.pointer.over);
        // Centered on the nominal 800x600 canvas until the first frame.
        assert_eq!(viewer.attractor.pos, Vec2::new(400.0, 300.0));
        assert!(viewer.last_viewport.is_none());
    }

    #[test]
    fn glow_mesh_fades_from_glow_color_to_transparent() {
        let viewer = Viewer::new();
        let mesh = viewer.glow_mesh(egui::pos2(100.0, 100.0));

        // Two vertices (inner + outer) per segment boundary, two triangles
        // per segment.
        assert_eq!(mesh.vertices.len(), (GLOW_SEGMENTS + 1) * 2);
        assert_eq!(mesh.indices.len(), GLOW_SEGMENTS * 2 * 3);

        // Inner vertices are colored, outer vertices fully transparent.
        assert_ne!(mesh.vertices[0].color, egui::Color32::TRANSPARENT);
        assert_eq!(mesh.vertices[1].color, egui::Color32::TRANSPARENT);

        // Inner ring sits at the core radius, outer at core + glow.
        let center = egui::pos2(100.0, 100.0);
        let inner_d = mesh.vertices[0].pos - center;
        let outer_d = mesh.vertices[1].pos - center;
        assert!((inner_d.length() - viewer.attractor.core_radius).abs() < 1e-3);
        assert!(
            (outer_d.length() - viewer.attractor.core_radius - viewer.attractor.glow_thickness)
                .abs()
                < 1e-3
        );
    }
}
