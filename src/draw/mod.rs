//! Defines the helper trait [`DrawSegments::add_collection`] on various drawing surfaces.
//!
//! A surface only needs to accept colored, variably wide line segments.
//! Everything else (colormaps, widths per point, splitting a trajectory into segments)
//! is prepared before a [`LineCollection`] reaches it.
use crate::collection::LineCollection;

/// Add line collections to different "drawing surfaces" with ease.
///
/// Use different crate features to implement different surfaces:
/// - `draw-svg` to draw collections as svg lines
///
/// A plain `Vec<LineCollection>` is a surface as well, it simply records what it's given.
pub trait DrawSegments {
    /// Add a collection to the drawing surface.
    ///
    /// What this actually means depends on the surface.
    /// But generally this just prepares the collection to be drawn instead of actually drawing it.
    /// Every call adds exactly one object to the surface.
    fn add_collection(&mut self, collection: LineCollection);
}

impl DrawSegments for Vec<LineCollection> {
    fn add_collection(&mut self, collection: LineCollection) {
        self.push(collection);
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
