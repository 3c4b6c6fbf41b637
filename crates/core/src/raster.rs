//! Row-major grid of RGB pixels produced by the wheel renderer.

use crate::color::Rgb;
use crate::error::WheelError;

/// A `width * height` grid of [`Rgb`] pixels in row-major order.
///
/// A 0×0 (or 0×n) raster is valid and simply holds no pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Raster {
    /// Creates a black raster of the given dimensions.
    ///
    /// Returns `WheelError::InvalidDimensions` if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, WheelError> {
        let len = width
            .checked_mul(height)
            .ok_or(WheelError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; len],
        })
    }

    /// Creates a raster from a pre-built pixel vector, validating that
    /// `pixels.len() == width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, WheelError> {
        let expected = width
            .checked_mul(height)
            .ok_or(WheelError::InvalidDimensions)?;
        if pixels.len() != expected {
            return Err(WheelError::DimensionMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True if the raster holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Read-only access to the row-major pixel data.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Mutable access to the row-major pixel data.
    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Writes the pixel at `(x, y)`. Out-of-bounds writes are ignored and
    /// reported by returning `false`.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) -> bool {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
            true
        } else {
            false
        }
    }
}
