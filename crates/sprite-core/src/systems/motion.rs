use serde::{Deserialize, Serialize};

use crate::components::sprite::Sprite;

/// Velocity damping applied by [`Motion::Idle`] each call.
pub const IDLE_DAMPING: f32 = 0.95;

/// Fixed set of movement nudges a controller can apply to a sprite.
///
/// Directional variants step the velocity by the sprite's initial velocity on
/// one axis; `Idle` bleeds velocity off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    #[default]
    Idle,
    Left,
    Right,
    Up,
    Down,
}

impl Motion {
    pub fn apply(self, sprite: &mut Sprite) {
        let step = sprite.initial_velocity;
        match self {
            Motion::Idle => sprite.velocity *= IDLE_DAMPING,
            Motion::Left => sprite.velocity.x -= step.x,
            Motion::Right => sprite.velocity.x += step.x,
            Motion::Up => sprite.velocity.y -= step.y,
            Motion::Down => sprite.velocity.y += step.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::raster::{Raster, Rgba};
    use glam::Vec2;
    use std::sync::Arc;

    fn mover() -> Sprite {
        Sprite::new(Arc::new(Raster::filled(2, 2, Rgba::WHITE))).with_velocity(Vec2::new(3.0, 4.0))
    }

    #[test]
    fn directions_step_by_initial_velocity() {
        let mut s = mover();
        s.apply_motion(Motion::Right);
        assert_eq!(s.velocity, Vec2::new(6.0, 4.0));
        s.apply_motion(Motion::Left);
        s.apply_motion(Motion::Left);
        assert_eq!(s.velocity, Vec2::new(0.0, 4.0));
        s.apply_motion(Motion::Down);
        assert_eq!(s.velocity, Vec2::new(0.0, 8.0));
        s.apply_motion(Motion::Up);
        assert_eq!(s.velocity, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn idle_damps_velocity() {
        let mut s = mover().with_velocity(Vec2::new(100.0, -20.0));
        s.apply_motion(Motion::Idle);
        assert!((s.velocity.x - 95.0).abs() < 1e-4);
        assert!((s.velocity.y + 19.0).abs() < 1e-4);
        // Step size is unaffected by damping.
        assert_eq!(s.initial_velocity, Vec2::new(100.0, -20.0));
    }
}
