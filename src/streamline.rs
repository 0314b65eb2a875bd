//! Plot the path taken by a single particle as a tapering, color graded line.

use crate::collection::LineCollection;
use crate::color::Color;
use crate::colormap::{Colormap, Normalize};
use crate::draw::DrawSegments;
use crate::error::Result;
use crate::linspace::{linspace, power_spaced};
use crate::trajectory::Trajectory;
use log::{debug, warn};

/// How a streamline looks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamlineStyle {
    /// Color at the start of the trajectory
    pub color1: Color,

    /// Color at the end of the trajectory
    pub color2: Color,

    /// How fast the color transitions from `color1` to `color2`.
    ///
    /// Values above `1` stay close to `color1` for longer, values below `1` reach `color2` sooner.
    pub color_power: f64,

    /// Width at the first point, the line tapers linearly down to `0` at the last point
    pub linewidth: f64,
}

impl Default for StreamlineStyle {
    fn default() -> Self {
        StreamlineStyle {
            color1: Color::BLACK,
            color2: Color::WHITE,
            color_power: 2.0,
            linewidth: 5.0,
        }
    }
}

impl StreamlineStyle {
    /// Build a style from textual color specifications (see [`crate::color`]).
    pub fn from_specs(color1: &str, color2: &str, color_power: f64, linewidth: f64) -> Result<Self> {
        Ok(StreamlineStyle {
            color1: color1.parse()?,
            color2: color2.parse()?,
            color_power,
            linewidth,
        })
    }

    /// Replace both gradient colors
    pub fn with_colors(mut self, color1: impl Into<Color>, color2: impl Into<Color>) -> Self {
        self.color1 = color1.into();
        self.color2 = color2.into();
        self
    }

    /// Replace the color bias
    pub fn with_color_power(mut self, color_power: f64) -> Self {
        self.color_power = color_power;
        self
    }

    /// Replace the starting width
    pub fn with_linewidth(mut self, linewidth: f64) -> Self {
        self.linewidth = linewidth;
        self
    }

    /// The colormap's key for each of `n` points: `(i / (n-1))^color_power`
    pub fn gradient_keys(&self, n: usize) -> Vec<f64> {
        power_spaced(self.color_power, n)
    }

    /// The width at each of `n` points, from `linewidth` down to `0`
    pub fn widths(&self, n: usize) -> Vec<f64> {
        linspace(self.linewidth, 0.0, n)
    }

    /// The colormap going from `color1` to `color2`
    pub fn colormap(&self) -> Result<Colormap> {
        Colormap::two_colors(self.color1, self.color2)
    }
}

/// Assemble the [`LineCollection`] for a trajectory without drawing it.
///
/// Fails if `x_data` and `y_data` differ in length or hold fewer than two points.
pub fn streamline_collection(
    x_data: &[f64],
    y_data: &[f64],
    style: &StreamlineStyle,
) -> Result<LineCollection> {
    if !(style.color_power > 0.0) {
        warn!("color_power {} isn't positive", style.color_power);
    }
    if !(style.linewidth > 0.0) {
        warn!("linewidth {} isn't positive", style.linewidth);
    }

    let trajectory = Trajectory::from_xy(x_data, y_data)?;
    let n = trajectory.len();

    let keys = style.gradient_keys(n);
    let colormap = style.colormap()?;
    let segments = trajectory.segments();
    let widths = style.widths(n);

    debug!(
        "streamline of {} segments, color power {}, width {}",
        segments.len(),
        style.color_power,
        style.linewidth
    );

    LineCollection::new(segments, keys, colormap, Normalize::new(0.0, 1.0), widths)
}

/// Plot the path taken by a single particle onto `surface`.
///
/// The line's color goes from `style.color1` at the first point to `style.color2` at the last,
/// and its width from `style.linewidth` down to `0`.
/// Exactly one collection is added to the surface. On error the surface is left untouched.
pub fn streamline_plot<D: DrawSegments + ?Sized>(
    surface: &mut D,
    x_data: &[f64],
    y_data: &[f64],
    style: &StreamlineStyle,
) -> Result<()> {
    let collection = streamline_collection(x_data, y_data, style)?;
    surface.add_collection(collection);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamlineError;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-9, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn defaults() {
        let style = StreamlineStyle::default();
        assert_eq!(style.color1, Color::BLACK);
        assert_eq!(style.color2, Color::WHITE);
        assert_eq!(style.color_power, 2.0);
        assert_eq!(style.linewidth, 5.0);
        assert_eq!(
            StreamlineStyle::from_specs("black", "white", 2.0, 5.0).unwrap(),
            style
        );
    }

    #[test]
    fn four_points() {
        let collection = streamline_collection(
            &[0.0, 1.0, 2.0, 3.0],
            &[0.0, 1.0, 0.0, 1.0],
            &StreamlineStyle::default(),
        )
        .unwrap();
        assert_eq!(collection.len(), 3);
        assert_close(collection.widths(), &[5.0, 10.0 / 3.0, 5.0 / 3.0, 0.0]);
        assert_close(collection.keys(), &[0.0, 1.0 / 9.0, 4.0 / 9.0, 1.0]);
        assert_eq!(collection.colormap().len(), 256);
        assert_eq!(collection.norm(), Normalize::new(0.0, 1.0));
    }

    #[test]
    fn linear_power() {
        let style = StreamlineStyle::default().with_color_power(1.0).with_linewidth(2.0);
        assert_close(&style.gradient_keys(3), &[0.0, 0.5, 1.0]);
        assert_close(&style.widths(3), &[2.0, 1.0, 0.0]);
    }

    #[test]
    fn rejects_before_drawing() {
        let mut surface: Vec<LineCollection> = Vec::new();
        let style = StreamlineStyle::default();
        assert_eq!(
            streamline_plot(&mut surface, &[0.0, 1.0, 2.0], &[0.0, 1.0], &style),
            Err(StreamlineError::LengthMismatch { x: 3, y: 2 })
        );
        assert_eq!(
            streamline_plot(&mut surface, &[0.0], &[0.0], &style),
            Err(StreamlineError::TooFewPoints(1))
        );
        assert!(surface.is_empty());

        assert_eq!(
            StreamlineStyle::from_specs("black", "nope", 2.0, 5.0),
            Err(StreamlineError::InvalidColor("nope".to_string()))
        );
    }
}
