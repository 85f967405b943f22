// core/pixel.rs
//
// Narrow-phase per-pixel overlap test.
//
// A's pixel grid is mapped into B's local space through a single affine
// transform. Moving one pixel along A's X or Y axis always moves by the same
// vector in B's space, so the scan walks A row by row and adds a constant
// step per pixel instead of transforming every point.

use glam::{Affine2, Vec2};

use crate::components::raster::Raster;

/// Returns true when some non-transparent pixel of `a` lands on a
/// non-transparent pixel of `b`.
///
/// `transform_a` and `transform_b` are the local-to-world transforms of the
/// two rasters. Each of A's pixels is mapped to the nearest of B's pixels
/// (ties round to even). Exits on the first hit.
///
/// A non-invertible `transform_b` (for example zero scale) reports no
/// collision.
pub fn intersect_pixels(
    transform_a: &Affine2,
    a: &Raster,
    transform_b: &Affine2,
    b: &Raster,
) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }

    let det = transform_b.matrix2.determinant();
    if det == 0.0 || !det.is_finite() {
        log::warn!("pixel test skipped: target transform is not invertible (det={})", det);
        return false;
    }

    // A-local -> world -> B-local
    let a_to_b = transform_b.inverse() * *transform_a;

    let step_x = a_to_b.transform_vector2(Vec2::X);
    let step_y = a_to_b.transform_vector2(Vec2::Y);

    // Start of the current row of A, expressed in B's space.
    let mut row_in_b = a_to_b.transform_point2(Vec2::ZERO);

    let width_b = i64::from(b.width());
    let height_b = i64::from(b.height());

    for ya in 0..a.height() {
        let mut pos_in_b = row_in_b;

        for xa in 0..a.width() {
            let xb = pos_in_b.x.round_ties_even() as i64;
            let yb = pos_in_b.y.round_ties_even() as i64;

            if (0..width_b).contains(&xb) && (0..height_b).contains(&yb) {
                let color_a = a.pixel(xa, ya);
                let color_b = b.pixel(xb as u32, yb as u32);
                if !color_a.is_transparent() && !color_b.is_transparent() {
                    log::trace!("pixel hit: a({}, {}) -> b({}, {})", xa, ya, xb, yb);
                    return true;
                }
            }

            pos_in_b += step_x;
        }

        row_in_b += step_y;
    }

    false
}
