//! Error types for trueno-grapher operations.
//!
//! Drawing itself never fails: invalid plot input is suppressed silently.
//! Errors only arise when wrapping a pixel buffer or encoding output.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-grapher operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a surface or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel slice shorter than `width * height`.
    #[error("Pixel buffer too small: expected {expected} pixels, got {actual}")]
    BufferTooSmall {
        /// Required number of pixels.
        expected: usize,
        /// Length of the supplied slice.
        actual: usize,
    },
}
