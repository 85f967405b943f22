use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::core::bounds::Rect;

/// One RGBA8 sample. Layout matches tightly packed RGBA8 image bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Zero alpha never takes part in a collision.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RasterError {
    /// Sample count does not match the declared dimensions.
    #[error("raster {width}x{height} expects {expected} samples, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    /// Packed RGBA8 byte count does not match the declared dimensions.
    #[error("raster {width}x{height} expects {expected} bytes of RGBA8, got {actual}")]
    ByteLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Immutable row-major pixel grid.
///
/// Decoding is left to the asset layer; sprites share a raster through an
/// `Arc` and collision tests only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Build from tightly packed RGBA8 bytes (4 bytes per pixel).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize;
        if bytes.len() != expected * 4 {
            return Err(RasterError::ByteLength {
                width,
                height,
                expected: expected * 4,
                actual: bytes.len(),
            });
        }
        let pixels: &[Rgba] = bytemuck::cast_slice(bytes);
        Self::new(width, height, pixels.to_vec())
    }

    /// A raster where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Sample at `(x, y)`. Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[x as usize + y as usize * self.width as usize]
    }

    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).a
    }

    /// Raw local bounds `(0, 0, width, height)`.
    pub fn local_rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Center pivot, using integer halves of the dimensions.
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba8_reads_row_major() {
        let bytes = [
            1, 2, 3, 4, 5, 6, 7, 8, //
            9, 10, 11, 12, 13, 14, 15, 0,
        ];
        let r = Raster::from_rgba8(2, 2, &bytes).unwrap();
        assert_eq!(r.pixel(1, 0), Rgba::new(5, 6, 7, 8));
        assert_eq!(r.pixel(0, 1), Rgba::new(9, 10, 11, 12));
        assert_eq!(r.alpha(1, 1), 0);
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let err = Raster::from_rgba8(2, 2, &[0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            RasterError::ByteLength { width: 2, height: 2, expected: 16, actual: 12 }
        );

        // A partial trailing pixel is reported as its raw byte count.
        let err = Raster::from_rgba8(2, 2, &[0u8; 13]).unwrap_err();
        assert!(err.to_string().contains("got 13"), "{}", err);

        let err = Raster::new(3, 1, vec![Rgba::WHITE; 2]).unwrap_err();
        assert!(err.to_string().contains("3x1"));
    }

    #[test]
    fn transparency_and_emptiness() {
        assert!(Rgba::TRANSPARENT.is_transparent());
        assert!(Rgba::new(255, 255, 255, 0).is_transparent());
        assert!(!Rgba::new(0, 0, 0, 1).is_transparent());
        assert!(Raster::filled(0, 5, Rgba::WHITE).is_empty());
        assert!(!Raster::filled(1, 1, Rgba::WHITE).is_empty());
    }

    #[test]
    fn center_uses_integer_halves() {
        let r = Raster::filled(15, 9, Rgba::WHITE);
        assert_eq!(r.center(), Vec2::new(7.0, 4.0));
    }

    #[test]
    fn from_fn_places_samples() {
        let r = Raster::from_fn(3, 2, |x, y| Rgba::new(x as u8, y as u8, 0, 255));
        assert_eq!(r.pixel(2, 1), Rgba::new(2, 1, 0, 255));
        assert_eq!(r.local_rect(), Rect::new(0.0, 0.0, 3.0, 2.0));
    }
}
