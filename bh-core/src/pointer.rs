use crate::types::Viewport;
use glam::Vec2;

/// Pointer tracking state fed by the host windowing layer.
///
/// The attractor never sees this type directly; the driver resolves it to
/// a plain target position once per frame via [`PointerState::target`].
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Vec2,
    pub over: bool,
}

impl PointerState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pos: viewport.center(),
            over: false,
        }
    }

    pub fn enter(&mut self) {
        self.over = true;
    }

    /// Pointer left the canvas: fall back to tracking the screen center.
    pub fn leave(&mut self, viewport: Viewport) {
        self.over = false;
        self.pos = viewport.center();
    }

    /// Canvas-relative pointer movement.
    pub fn moved(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Target the attractor should chase this frame: the pointer while it
    /// is over the canvas, the (freshly computed) viewport center otherwise.
    pub fn target(&self, viewport: Viewport) -> Vec2 {
        if self.over { self.pos } else { viewport.center() }
    }
}
