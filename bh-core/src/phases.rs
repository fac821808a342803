//! High-level per-frame phases for the black-hole animation.
//!
//! The driver runs, in order:
//! 1. [`populate_phase`] — one-shot pool ramp-up (one particle per spawn
//!    interval until the pool is full).
//! 2. [`respawn_phase`] — captured particles whose cooldown elapsed are
//!    re-seeded at a random screen edge.
//! 3. [`step_phase`] — every active particle is pulled toward the attractor;
//!    capture transitions happen here.
//!
//! The attractor itself is stepped by the driver after all particles, so
//! every particle in a frame sees the same attractor position.

use crate::{
    attractor::Attractor,
    config::Config,
    particle::{Particle, ParticleState},
    types::Viewport,
};
use rand::Rng;

/// Grows the pool by at most one particle per call.
///
/// Starting from an empty pool, the first particle is added immediately;
/// afterwards one is added whenever `cfg.spawn_interval` seconds have
/// passed since the previous addition, until `cfg.particle_limit` is
/// reached. `last_spawn` is updated in place on each addition.
pub fn populate_phase(
    particles: &mut Vec<Particle>,
    last_spawn: &mut f64,
    now: f64,
    viewport: Viewport,
    cfg: &Config,
    rng: &mut impl Rng,
) {
    if particles.len() >= cfg.particle_limit {
        return;
    }
    if particles.is_empty() || now - *last_spawn >= cfg.spawn_interval {
        particles.push(Particle::new(viewport, rng));
        *last_spawn = now;
    }
}

/// Returns captured particles to play once their cooldown deadline passes.
pub fn respawn_phase(
    particles: &mut [Particle],
    now: f64,
    viewport: Viewport,
    rng: &mut impl Rng,
) {
    for p in particles.iter_mut() {
        if let ParticleState::Resetting { reset_at } = p.state
            && now >= reset_at
        {
            p.reset(viewport, rng);
        }
    }
}

/// Advances every active particle toward the attractor.
///
/// Resetting particles are skipped inside [`Particle::step`], so the pool
/// can be iterated uniformly.
pub fn step_phase(
    particles: &mut [Particle],
    attractor: &Attractor,
    viewport: Viewport,
    cfg: &Config,
    now: f64,
    rng: &mut impl Rng,
) {
    for p in particles.iter_mut() {
        p.step(attractor, viewport, cfg, now, rng);
    }
}
