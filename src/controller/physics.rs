use glam::Vec2;

use crate::model::WorldBounds;

/// Kinematic body for the controlled entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub half_extent: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half_extent: Vec2::splat(size / 2.0),
        }
    }
}

/// Moves bodies by their velocity and keeps them inside the world
pub struct PhysicsSystem {
    pub bounds: WorldBounds,
}

impl PhysicsSystem {
    pub fn new(bounds: WorldBounds) -> Self {
        Self { bounds }
    }

    /// Advance one body by `dt` seconds.
    pub fn update(&self, body: &mut Body, dt: f32) {
        let next = body.pos + body.vel * dt;
        let clamped = self.bounds.clamp(next, body.half_extent);

        // Hitting a wall stops motion along that axis
        if clamped.x != next.x {
            body.vel.x = 0.0;
        }
        if clamped.y != next.y {
            body.vel.y = 0.0;
        }
        body.pos = clamped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrates_velocity() {
        let physics = PhysicsSystem::new(WorldBounds::default());
        let mut body = Body::new(Vec2::new(960.0, 960.0), 32.0);
        body.vel = Vec2::new(300.0, -300.0);
        physics.update(&mut body, 0.5);
        assert_eq!(body.pos, Vec2::new(1110.0, 810.0));
        assert_eq!(body.vel, Vec2::new(300.0, -300.0));
    }

    #[test]
    fn walls_stop_the_body() {
        let physics = PhysicsSystem::new(WorldBounds::new(100.0, 100.0));
        let mut body = Body::new(Vec2::new(90.0, 50.0), 10.0);
        body.vel = Vec2::new(300.0, 0.0);
        physics.update(&mut body, 1.0);
        assert_eq!(body.pos, Vec2::new(95.0, 50.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }
}
