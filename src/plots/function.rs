//! Scalar function plots, `y = f(x)` or `x = f(y)`.

use std::fmt;

use crate::color::Rgba;
use crate::framebuffer::Surface;
use crate::geometry::Point;
use crate::plots::{draw_samples, Axis, PlotStyle};
use crate::render::Drawable;

/// Builder for a scalar function plot.
///
/// The function is sampled once per integer pixel along the sweep axis,
/// covering the full width (or height) of the surface.
///
/// ```
/// use trueno_grapher::framebuffer::Framebuffer;
/// use trueno_grapher::plots::{FunctionPlot, PlotStyle};
/// use trueno_grapher::render::Drawable;
///
/// let plot = FunctionPlot::new(|x| x as f32 * 0.5).style(PlotStyle::Line).color(0xFFFF_0000_u32);
/// let mut fb = Framebuffer::new(20, 20).unwrap();
/// plot.draw(&mut fb.surface());
/// ```
pub struct FunctionPlot {
    function: Box<dyn Fn(i32) -> f32>,
    axis: Axis,
    style: PlotStyle,
    color: Rgba,
}

impl FunctionPlot {
    /// Create a new function plot (axis X, points, opaque white).
    #[must_use]
    pub fn new(function: impl Fn(i32) -> f32 + 'static) -> Self {
        Self {
            function: Box::new(function),
            axis: Axis::default(),
            style: PlotStyle::default(),
            color: Rgba::WHITE,
        }
    }

    /// Set the sweep axis.
    #[must_use]
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the plot style.
    #[must_use]
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the color (an [`Rgba`] or a packed `0xAARRGGBB` value).
    #[must_use]
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = color.into();
        self
    }

    /// Sample the function across a surface of the given size.
    #[must_use]
    pub fn samples(&self, width: u32, height: u32) -> Vec<Point> {
        match self.axis {
            Axis::X => (0..width as i32)
                .map(|x| Point::new(x as f32, (self.function)(x)))
                .collect(),
            Axis::Y => (0..height as i32)
                .map(|y| Point::new((self.function)(y), y as f32))
                .collect(),
        }
    }
}

impl fmt::Debug for FunctionPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPlot")
            .field("axis", &self.axis)
            .field("style", &self.style)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Drawable for FunctionPlot {
    fn draw(&self, surface: &mut Surface<'_>) {
        let points = self.samples(surface.width(), surface.height());
        draw_samples(surface, &points, self.style, self.color);
    }
}
