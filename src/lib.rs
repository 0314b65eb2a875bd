#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod collection;
pub mod color;
pub mod colormap;
pub mod draw;
pub mod error;
pub mod linspace;
pub mod streamline;
#[cfg(feature = "draw-svg")]
pub mod svg;
pub mod trajectory;

pub use crate::collection::LineCollection;
pub use crate::color::Color;
pub use crate::draw::DrawSegments;
pub use crate::error::{Result, StreamlineError};
pub use crate::streamline::{streamline_collection, streamline_plot, StreamlineStyle};
pub use crate::trajectory::Trajectory;
