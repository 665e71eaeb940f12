//! Parametric curve plots, `t -> (x, y)`.

use std::fmt;

use crate::color::Rgba;
use crate::framebuffer::Surface;
use crate::geometry::Point;
use crate::plots::{draw_samples, PlotStyle};
use crate::render::Drawable;
use crate::sampling::ParamRange;

/// Builder for a 2D parametric curve.
///
/// The equation is evaluated at every value of its [`ParamRange`]; the end
/// of the range is never sampled. A range that cannot be swept draws nothing.
///
/// ```
/// use trueno_grapher::plots::EquationPlot;
/// use trueno_grapher::sampling::ParamRange;
///
/// let circle = EquationPlot::new(|t: f32| (50.0 + 20.0 * t.sin(), 50.0 + 20.0 * t.cos()))
///     .range(ParamRange::new(0.0, std::f32::consts::TAU, 0.01));
/// assert_eq!(circle.samples().len(), 629);
/// ```
pub struct EquationPlot {
    equation: Box<dyn Fn(f32) -> (f32, f32)>,
    range: ParamRange,
    style: PlotStyle,
    color: Rgba,
}

impl EquationPlot {
    /// Create a new curve plot (points, opaque white, default range).
    #[must_use]
    pub fn new(equation: impl Fn(f32) -> (f32, f32) + 'static) -> Self {
        Self {
            equation: Box::new(equation),
            range: ParamRange::default(),
            style: PlotStyle::default(),
            color: Rgba::WHITE,
        }
    }

    /// Set the parameter range.
    #[must_use]
    pub fn range(mut self, range: ParamRange) -> Self {
        self.range = range;
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

    /// Evaluate the curve at every parameter value, in parameter order.
    #[must_use]
    pub fn samples(&self) -> Vec<Point> {
        self.range
            .samples()
            .map(|t| Point::from((self.equation)(t)))
            .collect()
    }
}

impl fmt::Debug for EquationPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquationPlot")
            .field("range", &self.range)
            .field("style", &self.style)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Drawable for EquationPlot {
    fn draw(&self, surface: &mut Surface<'_>) {
        if !self.range.is_sweepable() {
            tracing::debug!(range = ?self.range, "skipping equation with unsweepable range");
            return;
        }
        let points = self.samples();
        draw_samples(surface, &points, self.style, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(calls: &Rc<RefCell<Vec<f32>>>) -> impl Fn(f32) -> (f32, f32) {
        let calls = Rc::clone(calls);
        move |t| {
            calls.borrow_mut().push(t);
            (t, t)
        }
    }

    #[test]
    fn test_half_open_sampling() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut fb = Framebuffer::new(20, 20).unwrap();
        EquationPlot::new(recording(&calls))
            .range(ParamRange::new(0.0, 10.0, 2.0))
            .draw(&mut fb.surface());

        assert_eq!(*calls.borrow(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(fb.get_pixel(8, 8), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_zero_step_never_calls_equation() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut fb = Framebuffer::new(20, 20).unwrap();
        EquationPlot::new(recording(&calls))
            .range(ParamRange::new(0.0, 10.0, 0.0))
            .style(PlotStyle::Line)
            .draw(&mut fb.surface());

        assert!(calls.borrow().is_empty());
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_unreachable_range_draws_nothing() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut fb = Framebuffer::new(20, 20).unwrap();
        EquationPlot::new(recording(&calls))
            .range(ParamRange::new(10.0, 0.0, 2.0))
            .draw(&mut fb.surface());

        assert!(calls.borrow().is_empty());
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_line_style_connects_in_parameter_order() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        // Triangle: (2,2) -> (12,2) -> (12,12)
        let corners = [(2.0, 2.0), (12.0, 2.0), (12.0, 12.0)];
        EquationPlot::new(move |t| corners[t as usize])
            .range(ParamRange::new(0.0, 3.0, 1.0))
            .style(PlotStyle::Line)
            .color(Rgba::BLUE)
            .draw(&mut fb.surface());

        assert_eq!(fb.get_pixel(7, 2), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(12, 7), Some(Rgba::BLUE));
        // No closing segment back to the first point
        assert_eq!(fb.get_pixel(7, 7), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_single_sample_line_draws_nothing() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        EquationPlot::new(|_| (5.0, 5.0))
            .range(ParamRange::new(0.0, 1.0, 1.0))
            .style(PlotStyle::Line)
            .draw(&mut fb.surface());
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_points_style_plots_each_sample() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        EquationPlot::new(|t| (t, 3.0))
            .range(ParamRange::new(0.0, 20.0, 5.0))
            .draw(&mut fb.surface());

        let lit = fb.pixels().iter().filter(|&&p| p != 0).count();
        assert_eq!(lit, 4);
        assert_eq!(fb.get_pixel(15, 3), Some(Rgba::WHITE));
    }
}
