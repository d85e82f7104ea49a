use glam::Vec2;

use super::WorldBounds;

/// Screen-space camera over a 2D world.
///
/// `offset` is the world position of the viewport's top-left corner. Text
/// marked as fixed to the camera ignores it.
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport: Vec2::new(width as f32, height as f32),
        }
    }

    /// Center the viewport on `target`, without showing anything outside `bounds`.
    pub fn follow(&mut self, target: Vec2, bounds: &WorldBounds) {
        let max = (bounds.size() - self.viewport).max(Vec2::ZERO);
        self.offset = (target - self.viewport / 2.0).clamp(Vec2::ZERO, max);
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        p - self.offset
    }
}
