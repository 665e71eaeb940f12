//! Pixel buffers and the borrowed drawing surface.
//!
//! The engine draws into a [`Surface`], a short-lived mutable view over a
//! caller-owned slice of packed `0xAARRGGBB` pixels in row-major order. The
//! surface is created for one draw call and never stored by the engine.
//!
//! [`Framebuffer`] is an owned buffer for callers that do not already have
//! pixel memory (tests, benches, PNG export).

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Validate surface dimensions and return the pixel count they require.
fn required_pixels(width: u32, height: u32) -> Result<usize> {
    let fits_i32 = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
    if width == 0 || height == 0 || !fits_i32 {
        return Err(Error::InvalidDimensions { width, height });
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or(Error::InvalidDimensions { width, height })
}

/// Mutable view over a caller-owned pixel buffer.
///
/// All writes are bounds-checked against `(width, height)`; writes outside
/// the rectangle are dropped silently.
#[derive(Debug)]
pub struct Surface<'a> {
    pixels: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> Surface<'a> {
    /// Wrap a row-major pixel slice.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `i32::MAX`,
    /// or if the slice holds fewer than `width * height` pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_grapher::framebuffer::Surface;
    ///
    /// let mut pixels = vec![0u32; 4 * 3];
    /// let surface = Surface::new(&mut pixels, 4, 3).unwrap();
    /// assert_eq!(surface.width(), 4);
    /// assert!(Surface::new(&mut pixels, 5, 3).is_err());
    /// ```
    pub fn new(pixels: &'a mut [u32], width: u32, height: u32) -> Result<Self> {
        let expected = required_pixels(width, height)?;
        if pixels.len() < expected {
            return Err(Error::BufferTooSmall {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The clip rectangle `[0, width-1] x [0, height-1]`.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width as f32 - 1.0, self.height as f32 - 1.0)
    }

    /// Whether an integer coordinate lies inside the surface.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Write one pixel, or do nothing if the coordinate is out of bounds.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if !self.contains(x, y) {
            return;
        }
        let idx = x as usize + y as usize * self.width as usize;
        self.pixels[idx] = color.to_packed();
    }

    /// Read back a packed pixel.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.pixels[x as usize + y as usize * self.width as usize])
    }
}

/// Owned buffer of packed `0xAARRGGBB` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Packed pixels in row-major order, no stride padding.
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero or exceeds `i32::MAX`.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_grapher::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let size = required_pixels(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the packed pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Borrow the whole buffer as a drawing surface.
    pub fn surface(&mut self) -> Surface<'_> {
        Surface {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color.to_packed());
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgba::from_packed(self.pixels[self.pixel_index(x, y)]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = color.to_packed();
    }

    /// Unpack into tightly packed `[R, G, B, A]` bytes for image encoders.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&p| Rgba::from_packed(p).to_array())
            .collect()
    }

    /// Calculate the element index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}
