//! Widget error types

use thiserror::Error;

/// Error raised by a host [`PaintSurface`](crate::PaintSurface)
/// implementation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{0}")]
pub struct SurfaceError(String);

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors that can occur in the embedded viewport widget
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Widget constructed with a zero-area initial size
    #[error("Initial widget size must be non-zero, got {width}x{height}")]
    EmptyInitialSize { width: u32, height: u32 },

    /// Engine frame byte length disagrees with its stated dimensions
    #[error("Frame of {width}x{height} pixels needs {expected} bytes, got {actual}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// The host paint surface failed
    #[error("Paint surface error: {0}")]
    Surface(#[from] SurfaceError),
}
