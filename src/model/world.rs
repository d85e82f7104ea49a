use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playable area in world units, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Clamp a box of `half_extent` centered at `p` so it stays inside the world.
    pub fn clamp(&self, p: Vec2, half_extent: Vec2) -> Vec2 {
        let min = half_extent.min(self.size() / 2.0);
        let max = (self.size() - half_extent).max(self.size() / 2.0);
        p.clamp(min, max)
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(1920.0, 1920.0)
    }
}
