//! Scalar field plots rendered as a normalized height map.
//!
//! # References
//!
//! - Borland, D., & Taylor, R. M. (2007). "Rainbow Color Map (Still) Considered Harmful."
//!   IEEE Computer Graphics and Applications.

use std::fmt;

use crate::color::{Gradient, Rgba};
use crate::framebuffer::Surface;
use crate::render::Drawable;
use crate::sampling::Extent;

/// Builder for a scalar field plot.
///
/// The field is sampled once at every pixel. Values are normalized against
/// the global min/max of the whole field and colored along a two-color HSV
/// gradient. A constant field has no span and is painted entirely in the
/// low color.
pub struct FieldPlot {
    field: Box<dyn Fn(i32, i32) -> f32>,
    gradient: Gradient,
}

impl FieldPlot {
    /// Create a new field plot (black to white gradient).
    #[must_use]
    pub fn new(field: impl Fn(i32, i32) -> f32 + 'static) -> Self {
        Self {
            field: Box::new(field),
            gradient: Gradient::default(),
        }
    }

    /// Set the low and high gradient colors.
    #[must_use]
    pub fn colors(mut self, low: impl Into<Rgba>, high: impl Into<Rgba>) -> Self {
        self.gradient = Gradient::new(low.into(), high.into());
        self
    }

    /// Set the gradient.
    #[must_use]
    pub fn gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = gradient;
        self
    }

    /// Sample every pixel of a `width x height` surface in row-major order.
    #[must_use]
    pub fn sample_grid(&self, width: u32, height: u32) -> Vec<f32> {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                values.push((self.field)(x, y));
            }
        }
        values
    }
}

impl fmt::Debug for FieldPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPlot")
            .field("gradient", &self.gradient)
            .finish_non_exhaustive()
    }
}

impl Drawable for FieldPlot {
    fn draw(&self, surface: &mut Surface<'_>) {
        let width = surface.width();
        let values = self.sample_grid(width, surface.height());

        // Global extent must be known before any pixel is colored.
        let extent = Extent::of(&values);
        if extent.is_flat() {
            tracing::debug!(min = extent.min, max = extent.max, "flat field, using low color");
        }

        let width = width as usize;
        for (i, &value) in values.iter().enumerate() {
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            surface.plot(x, y, self.gradient.at(extent.normalize(value)));
        }
    }
}
