use glam::Vec2;

use super::input::InputState;

/// Signed speeds per axis, world units per second. Screen space: +x right, +y down.
pub type Velocity2D = Vec2;

/// Map directional input to a target velocity.
///
/// Starts from zero every call. Each axis is resolved on its own, and when
/// both directions of an axis are held the first checked wins: up over down,
/// left over right.
pub fn compute_velocity(input: InputState, speed: f32) -> Velocity2D {
    let mut v = Velocity2D::ZERO;

    if input.up {
        v.y = -speed;
    } else if input.down {
        v.y = speed;
    }

    if input.left {
        v.x = -speed;
    } else if input.right {
        v.x = speed;
    }

    v
}
