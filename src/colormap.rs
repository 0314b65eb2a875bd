//! Colormaps map a normalized scalar to a color.
//!
//! [`Colormap`] is a linear segmented colormap: its colors are spread evenly over `[0, 1]`
//! and interpolated linearly in between. Lookups go through a precomputed table of `N` colors,
//! so a value picks the table entry of the bin it falls in.

use crate::color::Color;
use crate::error::{Result, StreamlineError};
use smallvec::SmallVec;

/// Number of entries most colormaps use for their lookup table
pub const DEFAULT_LOOKUP_SIZE: usize = 256;

/// A colormap interpolating linearly between a list of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    /// The colors the map was built from (two in the common case)
    stops: SmallVec<[Color; 2]>,

    /// Discretized map of `N` colors
    lookup: Vec<Color>,

    /// Color for values below `0`
    under: Color,

    /// Color for values above `1`
    over: Color,

    /// Color for `NaN`
    bad: Color,
}

impl Colormap {
    /// Builds a colormap from a list of colors evenly spread between `0` and `1`.
    ///
    /// `n` is the size of the lookup table the map is discretized into.
    /// A single color produces a constant map.
    /// Colors with a component outside of `0.0..=1.0` (or `NaN`) are rejected.
    pub fn from_list(colors: &[Color], n: usize) -> Result<Self> {
        if colors.is_empty() {
            return Err(StreamlineError::EmptyColormap);
        }
        if n < 2 {
            return Err(StreamlineError::InvalidLookupSize(n));
        }
        let stops = colors
            .iter()
            .map(|c| Color::try_rgba(c.r, c.g, c.b, c.a))
            .collect::<Result<SmallVec<[Color; 2]>>>()?;

        let lookup: Vec<Color> = (0..n)
            .map(|i| interpolate(&stops, i as f64 / (n - 1) as f64))
            .collect();

        Ok(Colormap {
            under: lookup[0],
            over: lookup[n - 1],
            bad: Color::TRANSPARENT,
            stops,
            lookup,
        })
    }

    /// Simple two color map using [`DEFAULT_LOOKUP_SIZE`] entries
    pub fn two_colors(from: Color, to: Color) -> Result<Self> {
        Colormap::from_list(&[from, to], DEFAULT_LOOKUP_SIZE)
    }

    /// Get the color for a normalized value
    ///
    /// Values below `0` or above `1` get the under and over colors, `NaN` the bad color.
    pub fn lookup(&self, value: f64) -> Color {
        if value.is_nan() {
            return self.bad;
        }
        if value < 0.0 {
            return self.under;
        }
        if value > 1.0 {
            return self.over;
        }
        let n = self.lookup.len();
        let index = ((value * n as f64) as usize).min(n - 1);
        self.lookup[index]
    }

    /// Size of the lookup table
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Always `false`, a colormap has at least two entries
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// The colors this map was built from
    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    /// Replace the colors used outside of `[0, 1]`
    pub fn with_extremes(mut self, under: Color, over: Color) -> Self {
        self.under = under;
        self.over = over;
        self
    }

    /// Replace the color used for `NaN`
    pub fn with_bad(mut self, bad: Color) -> Self {
        self.bad = bad;
        self
    }
}

/// Piecewise linear interpolation between evenly spaced stops
fn interpolate(stops: &[Color], t: f64) -> Color {
    if stops.len() == 1 {
        return stops[0];
    }
    let segments = (stops.len() - 1) as f64;
    let position = t * segments;
    let i = (position.floor() as usize).min(stops.len() - 2);
    stops[i].lerp(&stops[i + 1], position - i as f64)
}

/// Linear normalization of data values into `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    /// Value mapped to `0`
    pub vmin: f64,
    /// Value mapped to `1`
    pub vmax: f64,
}

impl Normalize {
    /// Create a normalization mapping `vmin` to `0` and `vmax` to `1`
    pub fn new(vmin: f64, vmax: f64) -> Self {
        Normalize { vmin, vmax }
    }

    /// Normalize a single value
    ///
    /// Values outside `vmin..vmax` are not clipped. A degenerate range maps everything to `0`.
    pub fn apply(&self, value: f64) -> f64 {
        if self.vmin == self.vmax {
            0.0
        } else {
            (value - self.vmin) / (self.vmax - self.vmin)
        }
    }
}

impl Default for Normalize {
    fn default() -> Self {
        Normalize::new(0.0, 1.0)
    }
}
