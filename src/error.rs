//! Error types for barviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in barviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or chart.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A series whose length does not match the category count.
    #[error("Series '{name}' has {actual} values, expected {expected} (one per category)")]
    SeriesLengthMismatch {
        /// Name of the offending series.
        name: String,
        /// Expected length (number of categories).
        expected: usize,
        /// Actual length of the series.
        actual: usize,
    },

    /// Scale domain error (e.g., zero-width domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
