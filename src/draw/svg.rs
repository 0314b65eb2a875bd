//! Draw a line collection in a svg

use crate::collection::LineCollection;
use crate::draw::DrawSegments;
use crate::svg::{Group, Line, SVG};
use log::trace;

impl DrawSegments for SVG {
    /// Adds a single `<g>` holding one `<line>` per segment.
    ///
    /// The view box is left untouched, use [`SVG::fit_to`] with the collection's
    /// [data limits](LineCollection::data_limits) to frame it.
    fn add_collection(&mut self, collection: LineCollection) {
        let mut group = Group::default();
        for (&[from, to], color, width) in collection.styled_segments() {
            trace!(
                "segment {:?} -> {:?} in {} at width {}",
                from,
                to,
                color.to_hex(),
                width
            );
            group.elements.push(Box::new(Line {
                from,
                to,
                width: Some(width),
                color,
            }));
        }
        self.add_elem(group);
    }
}
