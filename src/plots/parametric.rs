//! Parametric surface plots, `(t, s) -> (x, y, height)`.
//!
//! Surfaces are not projected: each sample lands on the pixel given by its
//! truncated `(x, y)`, and where several samples share a pixel the greatest
//! height wins. Dense sampling therefore yields solid coverage with the
//! highest layer visible.

use std::collections::HashMap;
use std::fmt;

use crate::color::{Gradient, Rgba};
use crate::framebuffer::Surface;
use crate::render::Drawable;
use crate::sampling::{Extent, ParamRange};

/// Per-pixel maximum heights collected from a surface sweep.
#[derive(Debug, Clone, Default)]
pub struct HeightMap {
    heights: HashMap<(i32, i32), f32>,
    extent: Extent,
}

impl HeightMap {
    /// Create an empty height map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. The pixel keeps the larger of its current and new
    /// height; the extent includes every finite sample either way.
    ///
    /// A non-finite stored height is replaced by any later sample, so it can
    /// never shadow the real maximum.
    pub fn insert(&mut self, x: i32, y: i32, height: f32) {
        self.extent.include(height);
        self.heights
            .entry((x, y))
            .and_modify(|current| {
                if !current.is_finite() || height > *current {
                    *current = height;
                }
            })
            .or_insert(height);
    }

    /// Height stored for a pixel.
    #[must_use]
    pub fn height_at(&self, x: i32, y: i32) -> Option<f32> {
        self.heights.get(&(x, y)).copied()
    }

    /// Min/max over all recorded samples, including occluded ones.
    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of distinct pixels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// True if no sample was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Iterate `((x, y), height)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), f32)> + '_ {
        self.heights.iter().map(|(&key, &height)| (key, height))
    }
}

/// Builder for a parametric surface plot.
pub struct ParametricSurfacePlot {
    function: Box<dyn Fn(f32, f32) -> (f32, f32, f32)>,
    t_range: ParamRange,
    s_range: ParamRange,
    gradient: Gradient,
}

impl ParametricSurfacePlot {
    /// Create a new surface plot (default ranges, black to white gradient).
    #[must_use]
    pub fn new(function: impl Fn(f32, f32) -> (f32, f32, f32) + 'static) -> Self {
        Self {
            function: Box::new(function),
            t_range: ParamRange::default(),
            s_range: ParamRange::default(),
            gradient: Gradient::default(),
        }
    }

    /// Set the outer parameter range.
    #[must_use]
    pub fn t_range(mut self, range: ParamRange) -> Self {
        self.t_range = range;
        self
    }

    /// Set the inner parameter range.
    #[must_use]
    pub fn s_range(mut self, range: ParamRange) -> Self {
        self.s_range = range;
        self
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

    /// Whether both parameter ranges can be swept.
    #[must_use]
    pub fn is_sweepable(&self) -> bool {
        self.t_range.is_sweepable() && self.s_range.is_sweepable()
    }

    /// Run the nested sweep (t outer, s inner) and resolve heights per pixel.
    #[must_use]
    pub fn height_map(&self) -> HeightMap {
        let mut map = HeightMap::new();
        if !self.is_sweepable() {
            return map;
        }

        for t in self.t_range.samples() {
            for s in self.s_range.samples() {
                let (x, y, height) = (self.function)(t, s);
                if !(x.is_finite() && y.is_finite()) {
                    continue;
                }
                map.insert(x as i32, y as i32, height);
            }
        }
        map
    }
}

impl fmt::Debug for ParametricSurfacePlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricSurfacePlot")
            .field("t_range", &self.t_range)
            .field("s_range", &self.s_range)
            .field("gradient", &self.gradient)
            .finish_non_exhaustive()
    }
}

impl Drawable for ParametricSurfacePlot {
    fn draw(&self, surface: &mut Surface<'_>) {
        if !self.is_sweepable() {
            tracing::debug!(
                t_range = ?self.t_range,
                s_range = ?self.s_range,
                "skipping parametric surface with unsweepable range"
            );
            return;
        }

        let map = self.height_map();
        let extent = map.extent();
        for ((x, y), height) in map.iter() {
            surface.plot(x, y, self.gradient.at(extent.normalize(height)));
        }
    }
}
