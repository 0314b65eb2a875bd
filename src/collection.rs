//! A collection of straight line segments drawn with individual colors and widths.
//!
//! This is the primitive drawing surfaces accept (see [`DrawSegments`]). Its constructor
//! performs all validation, so a collection which exists can always be drawn.
//!
//! Colors and widths are resolved per segment by cycling through the given values:
//! segment `i` uses `keys[i]` and `widths[i % widths.len()]`. Given one key and one width per
//! trajectory point, every segment therefore takes the values of its starting point and the
//! last point's values are never used.
//!
//! [`DrawSegments`]: crate::draw::DrawSegments

use crate::bounding_box::BoundingBox;
use crate::color::Color;
use crate::colormap::{Colormap, Normalize};
use crate::error::{Result, StreamlineError};
use crate::trajectory::Segment;

/// Segments colored by looking up scalar keys in a colormap
#[derive(Debug, Clone, PartialEq)]
pub struct LineCollection {
    segments: Vec<Segment>,
    keys: Vec<f64>,
    colormap: Colormap,
    norm: Normalize,
    widths: Vec<f64>,
    limits: BoundingBox<f64>,
}

impl LineCollection {
    /// Bundle segments with the data describing how to draw them.
    ///
    /// Fails if there are no segments, no widths or fewer keys than segments.
    pub fn new(
        segments: Vec<Segment>,
        keys: Vec<f64>,
        colormap: Colormap,
        norm: Normalize,
        widths: Vec<f64>,
    ) -> Result<Self> {
        let limits = BoundingBox::from_iter(segments.iter().flat_map(|[p, q]| [*p, *q]))
            .ok_or(StreamlineError::NoSegments)?;
        if widths.is_empty() {
            return Err(StreamlineError::EmptyWidths);
        }
        if keys.len() < segments.len() {
            return Err(StreamlineError::NotEnoughKeys {
                keys: keys.len(),
                segments: segments.len(),
            });
        }
        Ok(LineCollection {
            segments,
            keys,
            colormap,
            norm,
            widths,
            limits,
        })
    }

    /// The segments in drawing order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The scalar keys looked up in the colormap
    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    /// The widths as given, usually one per trajectory point
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    /// The colormap used to color the segments
    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    /// The normalization applied to keys before the lookup
    pub fn norm(&self) -> Normalize {
        self.norm
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`, a collection has at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Color of segment `i`
    pub fn segment_color(&self, i: usize) -> Color {
        self.colormap.lookup(self.norm.apply(self.keys[i]))
    }

    /// Width of segment `i`
    pub fn segment_width(&self, i: usize) -> f64 {
        self.widths[i % self.widths.len()]
    }

    /// The color of every segment
    pub fn segment_colors(&self) -> Vec<Color> {
        (0..self.len()).map(|i| self.segment_color(i)).collect()
    }

    /// The width of every segment
    pub fn segment_widths(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.segment_width(i)).collect()
    }

    /// Iterate over segments together with their resolved color and width
    pub fn styled_segments(&self) -> impl Iterator<Item = (&Segment, Color, f64)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(move |(i, segment)| (segment, self.segment_color(i), self.segment_width(i)))
    }

    /// Box containing every segment's end points
    pub fn data_limits(&self) -> &BoundingBox<f64> {
        &self.limits
    }
}
