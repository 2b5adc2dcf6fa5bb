//! Error types for the phosphor core.

use thiserror::Error;

/// Errors produced by demo construction and rendering operations.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Width or height was zero (or overflowed) when creating a field or surface.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A requested demo name was not recognized.
    #[error("unknown demo: {0}")]
    UnknownDemo(String),

    /// A requested palette name was not recognized.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
