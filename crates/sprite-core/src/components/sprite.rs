use std::sync::Arc;

use glam::{Affine2, Vec2};

use crate::api::config::{CollisionConfig, Viewport};
use crate::components::raster::Raster;
use crate::core::bounds::{bounding_rect, Rect};
use crate::core::transform::sprite_transform;
use crate::systems::collision::check_collision;
use crate::systems::kinematics::{self, BodyState, Integrator};
use crate::systems::motion::Motion;

/// Whether a sprite takes part in update and draw.
/// Only changed from outside; nothing in this crate flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Active,
    Inactive,
}

/// Mirroring applied when the sprite is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flip {
    #[default]
    None,
    Horizontal,
}

/// Everything a renderer needs to draw one sprite.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub image: Arc<Raster>,
    pub position: Vec2,
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: f32,
    pub flip: Flip,
}

/// A transformed raster sprite with simple Newtonian state.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Shared pixel data. Never mutated through the sprite.
    pub image: Arc<Raster>,
    /// Position in world space.
    pub position: Vec2,
    pub velocity: Vec2,
    /// Velocity given at construction; motion policies step by this amount.
    pub initial_velocity: Vec2,
    pub acceleration: Vec2,
    pub force: Vec2,
    pub mass: f32,
    /// Rotation in radians, kept within one turn by the updater.
    pub rotation: f32,
    /// Radians per second.
    pub rotation_speed: f32,
    /// Uniform scale. Zero or negative values degenerate the transform.
    pub scale: f32,
    /// Local-space pivot for scale and rotation.
    pub origin: Vec2,
    pub flip: Flip,
    pub lifecycle: Lifecycle,
}

impl Sprite {
    /// Create an active sprite at the world origin with unit scale.
    pub fn new(image: Arc<Raster>) -> Self {
        Self {
            image,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            initial_velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: 0.0,
            rotation: 0.0,
            rotation_speed: 0.0,
            scale: 1.0,
            origin: Vec2::ZERO,
            flip: Flip::None,
            lifecycle: Lifecycle::Active,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Sets both the current and the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self.initial_velocity = velocity;
        self
    }

    /// Pivot on the image center when `centered`, else on the top-left corner.
    pub fn with_centered_origin(mut self, centered: bool) -> Self {
        self.origin = if centered { self.image.center() } else { Vec2::ZERO };
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: f32) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_force(mut self, force: Vec2) -> Self {
        self.force = force;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    // -- Lifecycle --

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn set_lifecycle(&mut self, lifecycle: Lifecycle) {
        self.lifecycle = lifecycle;
    }

    // -- Geometry --

    /// Local-to-world transform built from origin, scale, rotation and position.
    pub fn transform(&self) -> Affine2 {
        sprite_transform(self.origin, self.scale, self.rotation, self.position)
    }

    /// World-space bounding box of the whole raster under the current transform.
    pub fn world_bounds(&self) -> Rect {
        bounding_rect(self.image.local_rect(), &self.transform())
    }

    /// Unrotated rectangle adjusted for origin and scale, for point picking.
    pub fn collision_rect(&self) -> Rect {
        let top_left = self.position - self.origin * self.scale;
        Rect::new(
            top_left.x,
            top_left.y,
            self.image.width() as f32 * self.scale,
            self.image.height() as f32 * self.scale,
        )
    }

    /// Point hit-test against [`Sprite::collision_rect`].
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.collision_rect().contains(point)
    }

    // -- Collision --

    /// Pixel-perfect collision with `other` using the default config.
    pub fn collides_with(&self, other: &Sprite) -> bool {
        self.collides_with_config(other, &CollisionConfig::default())
    }

    pub fn collides_with_config(&self, other: &Sprite, config: &CollisionConfig) -> bool {
        check_collision(self, other, config).is_hit()
    }

    // -- Kinematics --

    /// Snapshot handed to the integrator.
    pub fn body_state(&self) -> BodyState {
        BodyState {
            position: self.position,
            velocity: self.velocity,
            acceleration: self.acceleration,
            force: self.force,
            mass: self.mass,
        }
    }

    /// Advance one tick without any viewport containment.
    pub fn update<I: Integrator + ?Sized>(&mut self, dt: f32, integrator: &I) {
        kinematics::update(self, dt, integrator);
    }

    /// Advance one tick, then bounce off the viewport edges.
    pub fn update_bounded<I: Integrator + ?Sized>(
        &mut self,
        dt: f32,
        viewport: &Viewport,
        integrator: &I,
    ) {
        kinematics::update_bounded(self, dt, viewport, integrator);
    }

    pub fn is_off_screen(&self, viewport: &Viewport) -> bool {
        kinematics::is_off_screen(self, viewport)
    }

    pub fn apply_motion(&mut self, motion: Motion) {
        motion.apply(self);
    }

    // -- Draw --

    /// Draw parameters, or `None` while the sprite is inactive.
    pub fn draw_command(&self) -> Option<DrawCommand> {
        if !self.is_active() {
            return None;
        }
        Some(DrawCommand {
            image: Arc::clone(&self.image),
            position: self.position,
            rotation: self.rotation,
            origin: self.origin,
            scale: self.scale,
            flip: self.flip,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::raster::Rgba;

    fn image(w: u32, h: u32) -> Arc<Raster> {
        Arc::new(Raster::filled(w, h, Rgba::WHITE))
    }

    #[test]
    fn new_sprite_defaults() {
        let s = Sprite::new(image(16, 16));
        assert!(s.is_active());
        assert_eq!(s.force, Vec2::ZERO);
        assert_eq!(s.acceleration, Vec2::ZERO);
        assert_eq!(s.mass, 0.0);
        assert_eq!(s.origin, Vec2::ZERO);
        assert_eq!(s.scale, 1.0);
    }

    #[test]
    fn centered_origin_uses_image_center() {
        let s = Sprite::new(image(17, 10)).with_centered_origin(true);
        assert_eq!(s.origin, Vec2::new(8.0, 5.0));
        let s = s.with_centered_origin(false);
        assert_eq!(s.origin, Vec2::ZERO);
    }

    #[test]
    fn velocity_builder_records_initial() {
        let s = Sprite::new(image(4, 4)).with_velocity(Vec2::new(3.0, -2.0));
        assert_eq!(s.velocity, Vec2::new(3.0, -2.0));
        assert_eq!(s.initial_velocity, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn image_is_shared_not_copied() {
        let img = image(8, 8);
        let a = Sprite::new(Arc::clone(&img));
        let b = Sprite::new(Arc::clone(&img));
        assert!(Arc::ptr_eq(&a.image, &b.image));
        assert_eq!(Arc::strong_count(&img), 3);
    }

    #[test]
    fn collision_rect_accounts_for_origin_and_scale() {
        let s = Sprite::new(image(16, 8))
            .with_centered_origin(true)
            .with_scale(2.0)
            .with_position(Vec2::new(100.0, 50.0));
        assert_eq!(s.collision_rect(), Rect::new(84.0, 42.0, 32.0, 16.0));
        assert!(s.contains_point(Vec2::new(84.0, 42.0)));
        assert!(s.contains_point(Vec2::new(115.0, 57.0)));
        assert!(!s.contains_point(Vec2::new(116.0, 50.0)));
        assert!(!s.contains_point(Vec2::new(100.0, 41.0)));
    }

    #[test]
    fn world_bounds_follow_transform() {
        let s = Sprite::new(image(16, 16)).with_position(Vec2::new(50.0, 50.0));
        assert_eq!(s.world_bounds(), Rect::new(50.0, 50.0, 16.0, 16.0));
    }

    #[test]
    fn inactive_sprite_is_not_drawn() {
        let mut s = Sprite::new(image(4, 4))
            .with_flip(Flip::Horizontal)
            .with_rotation(0.5);
        let cmd = s.draw_command().expect("active sprite draws");
        assert_eq!(cmd.flip, Flip::Horizontal);
        assert_eq!(cmd.rotation, 0.5);

        s.set_lifecycle(Lifecycle::Inactive);
        assert!(s.draw_command().is_none());
    }

    #[test]
    fn body_state_snapshot() {
        let s = Sprite::new(image(4, 4))
            .with_mass(2.0)
            .with_force(Vec2::new(4.0, 0.0))
            .with_acceleration(Vec2::new(0.0, 1.0));
        let body = s.body_state();
        assert_eq!(body.mass, 2.0);
        assert_eq!(body.force, Vec2::new(4.0, 0.0));
        assert_eq!(body.acceleration, Vec2::new(0.0, 1.0));
    }
}
