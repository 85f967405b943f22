use glam::{Affine2, Vec2};

/// Axis-aligned rectangle in pixel units.
///
/// Used both for a sprite's raw local bounds `(0, 0, width, height)` and for
/// world-space bounding boxes produced by [`bounding_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Local raw bounds of a `width` x `height` pixel grid.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Smallest rectangle spanning `min..max`.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Corners in left-top, right-top, left-bottom, right-bottom order.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.left(), self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, point: Vec2) -> bool {
        self.left() <= point.x
            && point.x < self.right()
            && self.top() <= point.y
            && point.y < self.bottom()
    }
}

/// Map `rect` through `transform` and return the axis-aligned box enclosing
/// the four transformed corners.
///
/// Under rotation this is a bounding box, not a tight hull, so it is only
/// suitable for broad-phase pruning.
pub fn bounding_rect(rect: Rect, transform: &Affine2) -> Rect {
    let [lt, rt, lb, rb] = rect.corners().map(|c| transform.transform_point2(c));

    let min = lt.min(rt).min(lb.min(rb));
    let max = lt.max(rt).max(lb.max(rb));

    Rect::from_min_max(min, max)
}
