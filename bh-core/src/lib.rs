//! Core simulation library for a 2-D black-hole particle animation.
//!
//! Main components:
//! - [`attractor`] — the single gravitational attractor ("black hole").
//! - [`particle`] — pooled glowing particles and their lifecycle.
//! - [`pointer`] — pointer tracking and attractor target resolution.
//! - [`phases`] — high-level per-frame phases / pipeline.
//! - [`trail`] — per-particle fading render history.
//! - [`config`] — global tuning constants for the animation.
//! - [`color`] — HSLA color descriptor shared by attractor and particles.
//! - [`types`] — shared viewport type.

pub mod attractor;
pub mod color;
pub mod config;
pub mod particle;
pub mod phases;
pub mod pointer;
pub mod trail;
pub mod types;
