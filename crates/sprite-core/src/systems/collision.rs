use crate::api::config::{CollisionConfig, ScanOrder};
use crate::components::sprite::Sprite;
use crate::core::bounds::bounding_rect;
use crate::core::pixel::intersect_pixels;

/// How far a pairwise check got before it decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// World bounding boxes are disjoint. Raster data was not read.
    BroadPhaseMiss,
    /// Boxes overlap but no pair of opaque pixels does.
    NarrowPhaseMiss,
    /// At least one opaque pixel of each sprite coincides.
    Hit,
}

impl Contact {
    pub fn is_hit(self) -> bool {
        self == Contact::Hit
    }
}

/// Pairwise collision between `this` (the calling sprite) and `other`.
///
/// Bounding boxes are compared first; the per-pixel scan only runs when they
/// overlap. Aliveness is not checked.
pub fn check_collision(this: &Sprite, other: &Sprite, config: &CollisionConfig) -> Contact {
    let other_transform = other.transform();
    let this_transform = this.transform();

    // The transform already applies origin and scale, so start from raw
    // local bounds rather than the origin-adjusted collision rect.
    let other_rect = bounding_rect(other.image.local_rect(), &other_transform);
    let this_rect = bounding_rect(this.image.local_rect(), &this_transform);

    if !this_rect.intersects(&other_rect) {
        log::trace!("broad phase miss: {:?} vs {:?}", this_rect, other_rect);
        return Contact::BroadPhaseMiss;
    }

    let scan_this = match config.scan {
        ScanOrder::AsCalled => false,
        ScanOrder::SmallerFirst => this.image.pixels().len() < other.image.pixels().len(),
    };

    let hit = if scan_this {
        intersect_pixels(&this_transform, &this.image, &other_transform, &other.image)
    } else {
        intersect_pixels(&other_transform, &other.image, &this_transform, &this.image)
    };

    if hit {
        log::debug!("pixel collision inside {:?}", this_rect);
        Contact::Hit
    } else {
        Contact::NarrowPhaseMiss
    }
}
