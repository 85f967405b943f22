use std::f32::consts::TAU;
use std::time::Duration;

use glam::Vec2;

use crate::api::config::Viewport;
use crate::components::sprite::Sprite;

/// Newtonian state handed to an [`Integrator`] once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub force: Vec2,
    pub mass: f32,
}

/// Result of integrating one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Turns force, mass and acceleration into a new position and velocity.
///
/// The updater calls this exactly once per tick for every active sprite and
/// replaces the sprite's position and velocity with the result.
pub trait Integrator {
    fn integrate(&self, body: &BodyState, dt: f32) -> Displacement;
}

impl<F> Integrator for F
where
    F: Fn(&BodyState, f32) -> Displacement,
{
    fn integrate(&self, body: &BodyState, dt: f32) -> Displacement {
        self(body, dt)
    }
}

/// Semi-implicit Euler. Force contributes only when mass is positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl Integrator for EulerIntegrator {
    fn integrate(&self, body: &BodyState, dt: f32) -> Displacement {
        let mut accel = body.acceleration;
        if body.mass > 0.0 {
            accel += body.force / body.mass;
        }
        let velocity = body.velocity + accel * dt;
        Displacement {
            position: body.position + velocity * dt,
            velocity,
        }
    }
}

/// Frame time in seconds at whole-millisecond resolution.
pub fn elapsed_seconds(elapsed: Duration) -> f32 {
    elapsed.as_millis() as f32 / 1000.0
}

/// Advance an active sprite by `dt` seconds. Inactive sprites are untouched.
pub fn update<I: Integrator + ?Sized>(sprite: &mut Sprite, dt: f32, integrator: &I) {
    if !sprite.is_active() {
        return;
    }

    let out = integrator.integrate(&sprite.body_state(), dt);
    sprite.position = out.position;
    sprite.velocity = out.velocity;

    sprite.rotation = wrap_angle(sprite.rotation + sprite.rotation_speed * dt);
}

/// Reduce an angle into `[0, TAU)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// [`update`], then keep the sprite inside `viewport` by reflection.
pub fn update_bounded<I: Integrator + ?Sized>(
    sprite: &mut Sprite,
    dt: f32,
    viewport: &Viewport,
    integrator: &I,
) {
    if !sprite.is_active() {
        return;
    }
    update(sprite, dt, integrator);
    reflect_in_viewport(sprite, viewport);
}

/// Clamp the sprite's position to the viewport inset by its scaled origin and
/// reverse the velocity component on each side it crossed.
///
/// Sides are checked bottom, right, top, left. Each axis is independent, so a
/// corner can flip both components in one call.
pub fn reflect_in_viewport(sprite: &mut Sprite, viewport: &Viewport) {
    let inset = sprite.origin * sprite.scale;

    if sprite.position.y > viewport.height - inset.y {
        sprite.position.y = viewport.height - inset.y;
        sprite.velocity.y = -sprite.velocity.y;
    }
    if sprite.position.x > viewport.width - inset.x {
        sprite.position.x = viewport.width - inset.x;
        sprite.velocity.x = -sprite.velocity.x;
    }
    if sprite.position.y < inset.y {
        sprite.position.y = inset.y;
        sprite.velocity.y = -sprite.velocity.y;
    }
    if sprite.position.x < inset.x {
        sprite.position.x = inset.x;
        sprite.velocity.x = -sprite.velocity.x;
    }
}

/// True once the unscaled origin extent lies wholly past any viewport edge.
/// Cheap, non-reflecting check for callers that cull instead of bounce.
pub fn is_off_screen(sprite: &Sprite, viewport: &Viewport) -> bool {
    let p = sprite.position;
    let o = sprite.origin;
    p.x + o.x < 0.0 || p.x - o.x > viewport.width || p.y + o.y < 0.0 || p.y - o.y > viewport.height
}
