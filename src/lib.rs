//! # Trueno-Grapher
//!
//! Software rasterizer for mathematical plots on a packed 32-bit framebuffer.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library, trueno-grapher
//! draws scalar functions, scalar fields, parametric curves and parametric surfaces
//! into a caller-owned `0xAARRGGBB` pixel buffer, with clipped lines, byte-HSV
//! gradients and a strict draw-order compositor.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_grapher::prelude::*;
//!
//! let mut grapher = Grapher::new();
//! grapher
//!     .add_field(FieldPlot::new(|x, y| ((x as f32) * 0.1).sin() + (y as f32) * 0.01))
//!     .add_equation(
//!         EquationPlot::new(|t: f32| (32.0 + 20.0 * t.cos(), 32.0 + 20.0 * t.sin()))
//!             .range(ParamRange::new(0.0, std::f32::consts::TAU, 0.05))
//!             .style(PlotStyle::Line)
//!             .color(Rgba::RED),
//!     );
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! fb.clear(Rgba::rgb(40, 40, 40));
//! grapher.draw_all(&mut fb.surface());
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), trueno_grapher::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable trueno's parallel reductions
//! - `demo`: Build the `grapher-demo` binary (clap + tracing-subscriber)
//!
//! ## References
//!
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*. Addison-Wesley. (Cohen–Sutherland, DDA)
//! - Smith, A. R. (1978). "Color Gamut Transform Pairs." SIGGRAPH '78.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types, byte HSV conversion and interpolation.
pub mod color;

/// Packed pixel buffers and drawing surfaces.
pub mod framebuffer;

/// Geometric primitives (points, lines, rectangles).
pub mod geometry;

/// Parameter sweeps and value extents.
pub mod sampling;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Plot specifications (function, field, equation, parametric surface).
pub mod plots;

/// Ordered compositor replaying registered plots.
pub mod grapher;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-grapher operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_grapher::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{interpolate, Gradient, Hsv, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{Framebuffer, Surface};
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::grapher::{Grapher, Plot, PlotKind};
    pub use crate::output::PngEncoder;
    pub use crate::plots::{
        Axis, EquationPlot, FieldPlot, FunctionPlot, ParametricSurfacePlot, PlotStyle,
    };
    pub use crate::render::{clip_line, draw_line, plot_point, Drawable};
    pub use crate::sampling::{Extent, ParamRange};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
