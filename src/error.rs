//! Errors raised while assembling a streamline.
//!
//! Nothing is drawn when one of these is returned: every check happens before the
//! drawing surface is touched.

use thiserror::Error;

/// Everything that can go wrong while building the pieces of a streamline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StreamlineError {
    /// The x and y coordinates have different lengths
    #[error("x and y must have the same length, got {x} and {y}")]
    LengthMismatch {
        /// Number of x coordinates
        x: usize,
        /// Number of y coordinates
        y: usize,
    },

    /// Fewer than two points can't form a single segment
    #[error("a trajectory needs at least 2 points to form a segment, got {0}")]
    TooFewPoints(usize),

    /// A color specification which couldn't be understood
    #[error("invalid color specification: {0:?}")]
    InvalidColor(String),

    /// A colormap needs at least one color
    #[error("a colormap needs at least one color")]
    EmptyColormap,

    /// A colormap's lookup table needs at least two entries
    #[error("a colormap's lookup table needs at least 2 entries, got {0}")]
    InvalidLookupSize(usize),

    /// Not every segment has a color key
    #[error("{segments} segments but only {keys} color keys")]
    NotEnoughKeys {
        /// Number of color keys given
        keys: usize,
        /// Number of segments which need one
        segments: usize,
    },

    /// A line collection without any widths
    #[error("a line collection needs at least one width")]
    EmptyWidths,

    /// A line collection without any segments
    #[error("a line collection needs at least one segment")]
    NoSegments,
}

/// Result type used throughout this crate
pub type Result<T> = std::result::Result<T, StreamlineError>;
