// core/mod.rs
//
// Pure geometry: transform composition, bounding boxes and the per-pixel scan.
// Nothing here knows about sprites.

pub mod bounds;
pub mod pixel;
pub mod transform;
