use glam::Vec2;

/// One remembered draw position of a particle.
///
/// `age` counts frames since the slot was recorded; a freshly recorded
/// slot starts at age 1 (the live dot itself is not part of the trail).
#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub age: u32,
}

/// Fading render history for one particle.
///
/// egui repaints the whole surface every frame, so a translucent dark
/// wash cannot fade previous frames by itself the way an accumulating
/// canvas does. Instead each particle remembers where it was drawn on
/// recent frames; the renderer dims slot `age` by `retention^age`, which
/// reproduces repainting a wash that keeps `retention` of the previous
/// frame's brightness. Slots older than the configured cap are dropped.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: Vec<TrailPoint>,
}

impl Trail {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Ages every slot by one frame, dropping slots past `max_age`.
    pub fn fade(&mut self, max_age: u32) {
        for p in &mut self.points {
            p.age += 1;
        }
        self.points.retain(|p| p.age <= max_age);
    }

    /// Remembers the position drawn this frame, aging everything else.
    pub fn record(&mut self, pos: Vec2, max_age: u32) {
        self.fade(max_age);
        self.points.push(TrailPoint { pos, age: 1 });
    }

    /// Brightness multiplier for a slot aged `age` frames under the given
    /// per-frame retention factor.
    pub fn brightness(retention: f32, age: u32) -> f32 {
        retention.powi(age as i32)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
