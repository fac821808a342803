use glam::Vec2;

/// Current drawing-surface dimensions in logical pixels.
///
/// Queried fresh from the host every frame; the core never caches it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Midpoint of the viewport, floored to whole pixels.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }
}
