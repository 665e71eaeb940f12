//! Parameter sweeps and value normalization.
//!
//! [`ParamRange`] describes a half-open sweep `start, start + step, ...`
//! that stops before reaching `end`. [`Extent`] tracks the min/max of sampled
//! heights and maps them into `[0, 1]` for gradient coloring.

use trueno::Vector;

/// Half-open parameter sweep from `start` up to `end` by `step`.
///
/// A range whose step is not positive, whose bounds are not finite, or
/// whose `start` is not below `end` produces no samples.
///
/// ```
/// use trueno_grapher::sampling::ParamRange;
///
/// let ts: Vec<f32> = ParamRange::new(0.0, 10.0, 2.0).samples().collect();
/// assert_eq!(ts, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// First sampled value.
    pub start: f32,
    /// Exclusive bound; never sampled.
    pub end: f32,
    /// Increment between samples.
    pub step: f32,
}

impl Default for ParamRange {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.01)
    }
}

impl ParamRange {
    /// Create a new parameter range.
    #[must_use]
    pub const fn new(start: f32, end: f32, step: f32) -> Self {
        Self { start, end, step }
    }

    /// Whether stepping up from `start` can make progress toward `end`.
    #[must_use]
    pub fn is_sweepable(&self) -> bool {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return false;
        }
        self.step > 0.0 && self.start < self.end
    }

    /// Iterate the sampled parameter values in sweep order.
    ///
    /// Values are computed as `start + k * step` rather than by repeated
    /// addition, so long sweeps do not drift.
    #[must_use]
    pub fn samples(&self) -> ParamSamples {
        ParamSamples {
            range: *self,
            index: 0,
            done: !self.is_sweepable(),
        }
    }

    /// Number of values [`samples`](Self::samples) yields.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples().count()
    }
}

/// Iterator over the values of a [`ParamRange`].
#[derive(Debug, Clone)]
pub struct ParamSamples {
    range: ParamRange,
    index: u64,
    done: bool,
}

impl Iterator for ParamSamples {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.done {
            return None;
        }

        let t = self.range.start + self.range.step * self.index as f32;
        if t >= self.range.end {
            self.done = true;
            return None;
        }

        self.index += 1;
        Some(t)
    }
}

/// Min/max of a set of sampled heights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Smallest finite sample.
    pub min: f32,
    /// Largest finite sample.
    pub max: f32,
}

impl Default for Extent {
    fn default() -> Self {
        Self::empty()
    }
}

impl Extent {
    /// An extent containing no samples.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    /// Compute the extent of a slice using SIMD min/max reductions.
    ///
    /// Non-finite values are ignored. Returns an empty extent if no finite
    /// value is present.
    #[must_use]
    pub fn of(values: &[f32]) -> Self {
        let finite: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return Self::empty();
        }

        let vec = Vector::from_vec(finite);
        let min = vec.min().unwrap_or(f32::INFINITY);
        let max = vec.max().unwrap_or(f32::NEG_INFINITY);

        Self { min, max }
    }

    /// Widen the extent to include one sample. Non-finite samples are ignored.
    pub fn include(&mut self, value: f32) {
        if value.is_finite() {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
    }

    /// True when no finite sample has been included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// True when the extent has no positive span (constant or empty data).
    #[must_use]
    pub fn is_flat(&self) -> bool {
        let span = self.max - self.min;
        span.is_nan() || span <= 0.0
    }

    /// Map a value to `(value - min) / (max - min)`, clamped to `[0, 1]`.
    ///
    /// Flat extents and non-finite values map to 0.
    #[must_use]
    pub fn normalize(&self, value: f32) -> f32 {
        if self.is_flat() {
            return 0.0;
        }
        let t = (value - self.min) / (self.max - self.min);
        if t.is_finite() {
            t.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
