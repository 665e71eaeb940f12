//! Draw-order compositor.
//!
//! [`Grapher`] keeps every registered plot in a single ordered sequence.
//! Redrawing replays that sequence front to back, so a plot registered later
//! paints over earlier ones wherever they overlap, regardless of kind.

use std::collections::HashMap;

use crate::error::Result;
use crate::framebuffer::Surface;
use crate::plots::{EquationPlot, FieldPlot, FunctionPlot, ParametricSurfacePlot};
use crate::render::Drawable;

/// Kind tag of a registered plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotKind {
    /// [`FunctionPlot`].
    Function,
    /// [`FieldPlot`].
    Field,
    /// [`EquationPlot`].
    Equation,
    /// [`ParametricSurfacePlot`].
    ParametricSurface,
}

/// Any plot the compositor can replay.
#[derive(Debug)]
pub enum Plot {
    /// Scalar function of one pixel coordinate.
    Function(FunctionPlot),
    /// Scalar field over every pixel.
    Field(FieldPlot),
    /// Parametric curve.
    Equation(EquationPlot),
    /// Parametric surface with max-height occlusion.
    ParametricSurface(ParametricSurfacePlot),
}

impl Plot {
    /// The kind tag of this plot.
    #[must_use]
    pub fn kind(&self) -> PlotKind {
        match self {
            Self::Function(_) => PlotKind::Function,
            Self::Field(_) => PlotKind::Field,
            Self::Equation(_) => PlotKind::Equation,
            Self::ParametricSurface(_) => PlotKind::ParametricSurface,
        }
    }
}

impl Drawable for Plot {
    fn draw(&self, surface: &mut Surface<'_>) {
        match self {
            Self::Function(plot) => plot.draw(surface),
            Self::Field(plot) => plot.draw(surface),
            Self::Equation(plot) => plot.draw(surface),
            Self::ParametricSurface(plot) => plot.draw(surface),
        }
    }
}

impl From<FunctionPlot> for Plot {
    fn from(plot: FunctionPlot) -> Self {
        Self::Function(plot)
    }
}

impl From<FieldPlot> for Plot {
    fn from(plot: FieldPlot) -> Self {
        Self::Field(plot)
    }
}

impl From<EquationPlot> for Plot {
    fn from(plot: EquationPlot) -> Self {
        Self::Equation(plot)
    }
}

impl From<ParametricSurfacePlot> for Plot {
    fn from(plot: ParametricSurfacePlot) -> Self {
        Self::ParametricSurface(plot)
    }
}

/// Ordered collection of plots replayed onto a surface.
///
/// Plots are append-only: once registered they are never modified, removed
/// or reordered.
///
/// # Example
///
/// ```
/// use trueno_grapher::prelude::*;
///
/// let mut grapher = Grapher::new();
/// grapher
///     .add_field(FieldPlot::new(|x, y| (x + y) as f32).colors(0xFFFF_7F00_u32, 0xFF0F_E900_u32))
///     .add_function(FunctionPlot::new(|x| 0.5 * x as f32).style(PlotStyle::Line));
///
/// let mut pixels = vec![0u32; 64 * 48];
/// grapher.draw_into(&mut pixels, 64, 48).unwrap();
/// assert_eq!(pixels[0] >> 24, 0xFF);
/// ```
#[derive(Debug, Default)]
pub struct Grapher {
    plots: Vec<Plot>,
}

impl Grapher {
    /// Create an empty grapher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register any plot at the end of the draw order.
    pub fn add(&mut self, plot: impl Into<Plot>) -> &mut Self {
        self.plots.push(plot.into());
        self
    }

    /// Register a function plot.
    pub fn add_function(&mut self, plot: FunctionPlot) -> &mut Self {
        self.add(plot)
    }

    /// Register a field plot.
    pub fn add_field(&mut self, plot: FieldPlot) -> &mut Self {
        self.add(plot)
    }

    /// Register a parametric curve.
    pub fn add_equation(&mut self, plot: EquationPlot) -> &mut Self {
        self.add(plot)
    }

    /// Register a parametric surface.
    pub fn add_parametric_surface(&mut self, plot: ParametricSurfacePlot) -> &mut Self {
        self.add(plot)
    }

    /// Number of registered plots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// True if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Registered plots in draw order.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Number of registered plots of one kind.
    #[must_use]
    pub fn count(&self, kind: PlotKind) -> usize {
        self.plots.iter().filter(|plot| plot.kind() == kind).count()
    }

    /// Registered plot counts grouped by kind.
    #[must_use]
    pub fn kind_counts(&self) -> HashMap<PlotKind, usize> {
        let mut counts = HashMap::new();
        for plot in &self.plots {
            *counts.entry(plot.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Replay every plot, in registration order, onto the surface.
    #[tracing::instrument(
        skip_all,
        fields(width = surface.width(), height = surface.height(), plots = self.plots.len())
    )]
    pub fn draw_all(&self, surface: &mut Surface<'_>) {
        for (index, plot) in self.plots.iter().enumerate() {
            tracing::trace!(index, kind = ?plot.kind(), "drawing plot");
            plot.draw(surface);
        }
    }

    /// Wrap a raw pixel slice and replay every plot onto it.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or the slice is shorter
    /// than `width * height`. Nothing is drawn in that case.
    pub fn draw_into(&self, pixels: &mut [u32], width: u32, height: u32) -> Result<()> {
        let mut surface = Surface::new(pixels, width, height)?;
        self.draw_all(&mut surface);
        Ok(())
    }
}

impl Drawable for Grapher {
    fn draw(&self, surface: &mut Surface<'_>) {
        self.draw_all(surface);
    }
}
