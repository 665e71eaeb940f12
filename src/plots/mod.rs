//! Plot specifications and their sampling/drawing routines.
//!
//! Each plot kind wraps a caller-supplied callable plus draw parameters and
//! implements [`Drawable`](crate::render::Drawable). The engine knows nothing
//! about what the callables compute.

mod equation;
mod field;
mod function;
mod parametric;

pub use equation::EquationPlot;
pub use field::FieldPlot;
pub use function::FunctionPlot;
pub use parametric::{HeightMap, ParametricSurfacePlot};

use crate::color::Rgba;
use crate::framebuffer::Surface;
use crate::geometry::Point;
use crate::render::{draw_polyline, plot_point};

/// How sampled points are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotStyle {
    /// One pixel per sample.
    #[default]
    Points,
    /// Line segments between consecutive samples.
    Line,
}

/// Sweep axis of a [`FunctionPlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Sample every column x; the function returns y.
    #[default]
    X,
    /// Sample every row y; the function returns x.
    Y,
}

/// Render samples as points or as a connected polyline.
fn draw_samples(surface: &mut Surface<'_>, points: &[Point], style: PlotStyle, color: Rgba) {
    match style {
        PlotStyle::Points => {
            for &point in points {
                plot_point(surface, point, color);
            }
        }
        PlotStyle::Line => draw_polyline(surface, points, color),
    }
}
