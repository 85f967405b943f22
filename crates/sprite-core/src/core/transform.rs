use glam::{Affine2, Vec2};

/// Build a sprite's local-to-world transform.
///
/// Steps are applied in a fixed sequence: translate by `-origin`, scale
/// uniformly, rotate about Z, then translate to `position`. The origin
/// shift has to come first so that scale and rotation pivot on the origin.
pub fn sprite_transform(origin: Vec2, scale: f32, rotation: f32, position: Vec2) -> Affine2 {
    // glam composes right-to-left: the rightmost factor applies first.
    Affine2::from_translation(position)
        * Affine2::from_angle(rotation)
        * Affine2::from_scale(Vec2::splat(scale))
        * Affine2::from_translation(-origin)
}
