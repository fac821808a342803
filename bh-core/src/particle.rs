use crate::{
    attractor::{Attractor, pull_coefficient},
    color::Hsla,
    config::Config,
    trail::Trail,
    types::Viewport,
};
use glam::Vec2;
use rand::Rng;

/// Lifecycle state of a pooled particle.
///
/// Exactly one state holds at any instant. A `Resetting` particle is
/// invisible and inert until `reset_at` (in driver-clock seconds) passes
/// and [`Particle::reset`] re-seeds it at a screen edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleState {
    Active,
    Resetting { reset_at: f64 },
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub color: Hsla,
    pub state: ParticleState,
    /// Recent draw positions, dimmed by age when rendered.
    pub trail: Trail,
}

impl Particle {
    /// Creates a particle already active at a random edge point.
    pub fn new(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let mut particle = Self {
            pos: Vec2::ZERO,
            color: Hsla::new(0.0, 1.0, 0.5, 1.0),
            state: ParticleState::Active,
            trail: Trail::new(),
        };
        particle.reset(viewport, rng);
        particle
    }

    pub fn is_resetting(&self) -> bool {
        matches!(self.state, ParticleState::Resetting { .. })
    }

    /// Re-seeds the particle just outside one screen edge and gives it a
    /// fresh random color.
    ///
    /// Axis and side are chosen by two independent fair coin flips: the
    /// particle sits at `-1` or `dimension` on one axis and at a uniform
    /// whole-pixel coordinate in `[0, dimension)` on the other. The new
    /// color is a random hue at full saturation, 50% lightness, with alpha
    /// uniform in `[0.5, 1.0)`.
    pub fn reset(&mut self, viewport: Viewport, rng: &mut impl Rng) {
        self.state = ParticleState::Active;
        self.trail.clear();

        let horizontal_edge = rng.random_bool(0.5);
        let near_side = rng.random_bool(0.5);

        if horizontal_edge {
            self.pos.y = if near_side { -1.0 } else { viewport.height };
            self.pos.x = (rng.random::<f32>() * viewport.width).floor();
        } else {
            self.pos.x = if near_side { -1.0 } else { viewport.width };
            self.pos.y = (rng.random::<f32>() * viewport.height).floor();
        }

        let hue = (rng.random::<f32>() * 360.0).floor();
        let alpha = 0.5 + rng.random::<f32>() * 0.5;
        self.color = Hsla::new(hue, 1.0, 0.5, alpha);
    }

    /// Advances the particle toward the attractor for one frame.
    ///
    /// While resetting, physics is untouched and only the leftover trail
    /// keeps aging out. Otherwise the pre-step position joins the trail,
    /// the hue is retinted from the current distance (`dist / 1000 * 360`),
    /// the position moves by the shared [`pull_coefficient`] fraction of
    /// the offset, and if the distance (measured before the move) is inside
    /// the attractor's core the particle is captured: it flips to
    /// [`ParticleState::Resetting`] with a deadline `now` plus a uniform
    /// cooldown from the config.
    pub fn step(
        &mut self,
        attractor: &Attractor,
        viewport: Viewport,
        cfg: &Config,
        now: f64,
        rng: &mut impl Rng,
    ) {
        if self.is_resetting() {
            self.trail.fade(cfg.trail_max_age);
            return;
        }

        let offset = attractor.pos - self.pos;
        let dist = offset.length();
        let pull = pull_coefficient(dist, viewport, cfg);

        self.trail.record(self.pos, cfg.trail_max_age);
        self.color = Hsla::new((dist / 1000.0 * 360.0).floor(), 1.0, 0.5, 1.0);
        self.pos += offset * pull;

        if dist < attractor.core_radius {
            let delay = rng.random_range(cfg.reset_delay_min..cfg.reset_delay_max);
            self.state = ParticleState::Resetting {
                reset_at: now + delay,
            };
        }
    }
}
