use crate::{color::Hsla, config::Config, types::Viewport};
use glam::Vec2;

/// Pull coefficient toward a point at the given distance.
///
/// Normalized by the viewport width (plus a fixed slack) rather than a
/// constant, so the pull "feel" is resolution independent. Grows toward
/// `cfg.pull_gain` as the distance shrinks and goes negative (repels)
/// once the distance exceeds the normalization width.
pub fn pull_coefficient(dist: f32, viewport: Viewport, cfg: &Config) -> f32 {
    (1.0 - dist / (viewport.width + cfg.pull_reach_slack)) * cfg.pull_gain
}

#[derive(Debug)]
pub struct Attractor {
    pub pos: Vec2,
    pub core_radius: f32,
    pub glow_thickness: f32,
    pub hue: f32,
}

impl Attractor {
    pub fn new(viewport: Viewport, cfg: &Config) -> Self {
        let mut attractor = Self {
            pos: Vec2::ZERO,
            core_radius: cfg.core_radius,
            glow_thickness: cfg.glow_thickness,
            hue: 0.0,
        };
        attractor.recenter(viewport);
        attractor
    }

    /// Snaps the attractor to the viewport midpoint. Called at construction
    /// and whenever the viewport changes size.
    pub fn recenter(&mut self, viewport: Viewport) {
        self.pos = viewport.center();
    }

    /// Chases the target for one frame and advances the cycling hue.
    pub fn step(&mut self, target: Vec2, viewport: Viewport, cfg: &Config) {
        let offset = target - self.pos;
        let dist = offset.length();
        let pull = pull_coefficient(dist, viewport, cfg);

        self.pos += offset * pull;
        self.hue = (self.hue + cfg.hue_step) % 360.0;
    }

    /// Color at the inner edge of the glow ring; fades to transparent at
    /// `core_radius + glow_thickness`.
    pub fn glow_color(&self) -> Hsla {
        Hsla::new(self.hue, 0.95, 0.55, 0.75)
    }
}
