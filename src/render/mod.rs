//! Rasterization of points and lines.
//!
//! Everything the plot routines draw ends up here: single pixels through the
//! bounds-checked plotter, and segments through the clipped line rasterizer.
//!
//! # Algorithms
//!
//! - **Cohen-Sutherland**: region-code clipping against the surface rectangle
//! - **DDA**: floating-point stepping along the major axis
//!
//! # References
//!
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive Computer Graphics*.

mod primitives;

pub use primitives::{clip_line, draw_line, draw_polyline, plot_point, Drawable};
