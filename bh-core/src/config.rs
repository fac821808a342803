/// Global tuning constants for the animation.
///
/// The defaults reproduce the classic look: a pool of 50 particles, a
/// 40 px attractor core with a 10 px glow, and a pull that weakens with
/// distance normalized by the viewport width.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Final size of the particle pool.
    pub particle_limit: usize,
    /// Seconds between additions during the one-shot ramp-up.
    pub spawn_interval: f64,
    /// Attractor core radius; particles inside it are captured.
    pub core_radius: f32,
    /// Thickness of the glow ring around the core.
    pub glow_thickness: f32,
    /// Degrees the attractor hue advances per step, wrapping at 360.
    pub hue_step: f32,
    /// Pull coefficient at zero distance.
    pub pull_gain: f32,
    /// Added to the viewport width when normalizing distance for the pull.
    pub pull_reach_slack: f32,
    /// Draw radius of a particle dot.
    pub particle_radius: f32,
    /// Bounds of the uniform capture-to-respawn cooldown, in seconds.
    pub reset_delay_min: f64,
    pub reset_delay_max: f64,
    /// Fraction of a trail dot's brightness kept per frame; the complement
    /// of the dark wash alpha painted over the canvas.
    pub trail_retention: f32,
    /// Frames a trail slot survives before it is dropped.
    pub trail_max_age: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_limit: 50,
            spawn_interval: 0.15,
            core_radius: 40.0,
            glow_thickness: 10.0,
            hue_step: 0.2,
            pull_gain: 0.06,
            pull_reach_slack: 100.0,
            particle_radius: 2.0,
            reset_delay_min: 0.1,
            reset_delay_max: 0.9,
            trail_retention: 0.15,
            trail_max_age: 6,
        }
    }
}
