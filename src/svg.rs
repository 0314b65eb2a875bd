//! Small library to render line collections as svg.

use crate::bounding_box::BoundingBox;
use crate::color::Color;
use nalgebra::Vector2;
use std::fmt::{Display, Formatter};

type Rect = (f64, f64, f64, f64);

/// A svg document made of elements which know how to print themselves.
pub struct SVG {
    /// `min-x`, `min-y`, `width` and `height` of the visible area
    pub view_box: Rect,

    /// The document's top level elements in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl SVG {
    /// Empty document showing the given area
    pub fn new(view_box: Rect) -> Self {
        SVG {
            view_box,
            elements: Vec::new(),
        }
    }

    /// Append an element
    pub fn add_elem<E: Display + 'static>(&mut self, elem: E) {
        self.elements.push(Box::new(elem));
    }

    /// Show exactly the given box plus a margin around it
    pub fn fit_to(&mut self, bb: &BoundingBox<f64>, margin: f64) {
        let bb = bb.expand(margin);
        let size = bb.size();
        self.view_box = (bb.min.x, bb.min.y, size.x, size.y);
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</svg>")?;
        Ok(())
    }
}

/// A single straight `<line>`
pub struct Line {
    /// Start point
    pub from: Vector2<f64>,
    /// End point
    pub to: Vector2<f64>,
    /// Stroke width, left to the viewer's default if `None`
    pub width: Option<f64>,
    /// Stroke color, its alpha becomes the stroke opacity
    pub color: Color,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"",
            self.from[0],
            self.from[1],
            self.to[0],
            self.to[1],
            self.color.to_hex()
        )?;
        if self.color.opacity() < 1.0 {
            write!(f, " stroke-opacity=\"{}\"", self.color.opacity())?;
        }
        if let Some(width) = self.width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        writeln!(f, " stroke-linecap=\"round\"/>")?;
        Ok(())
    }
}

/// A `<g>` grouping elements
#[derive(Default)]
pub struct Group {
    /// The group's children in drawing order
    pub elements: Vec<Box<dyn Display>>,
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<g>")?;
        for elem in self.elements.iter() {
            elem.fmt(f)?;
        }
        writeln!(f, "</g>")?;
        Ok(())
    }
}
