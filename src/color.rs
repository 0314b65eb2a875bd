//! RGBA colors and the textual color specifications used to describe them.
//!
//! A specification is one of
//! - a named color, either a single letter (`"k"`, `"w"`, `"r"`, ...) or a css name (`"black"`, `"orange"`, ...)
//! - a hex string: `"#rgb"`, `"#rgba"`, `"#rrggbb"` or `"#rrggbbaa"`
//! - a gray level between `"0"` (black) and `"1"` (white)
//!
//! Tuples of floats between 0 and 1 convert into colors as well.

use crate::error::{Result, StreamlineError};
use std::str::FromStr;

/// RGBA color with components between `0.0` and `1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create an opaque color without checking its components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    /// Create a color without checking its components.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    /// Create a color, rejecting components outside of `0.0..=1.0`.
    pub fn try_rgba(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        if [r, g, b, a].iter().all(|c| (0.0..=1.0).contains(c)) {
            Ok(Color { r, g, b, a })
        } else {
            Err(StreamlineError::InvalidColor(format!("({}, {}, {}, {})", r, g, b, a)))
        }
    }

    /// Create an opaque color from 8-bit components.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Color::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`)
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t_inv = 1.0 - t;
        Color {
            r: self.r * t_inv + other.r * t,
            g: self.g * t_inv + other.g * t,
            b: self.b * t_inv + other.b * t,
            a: self.a * t_inv + other.a * t,
        }
    }

    /// Format the rgb part as `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }

    /// The alpha component
    pub fn opacity(&self) -> f64 {
        self.a
    }
}

/// Converts a component between 0 and 1 to a byte, clamping anything outside.
fn to_byte(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = StreamlineError;

    fn from_str(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let invalid = || StreamlineError::InvalidColor(spec.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let lower = trimmed.to_ascii_lowercase();
        if let Some(&(_, [r, g, b])) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
            return Ok(Color::from_bytes(r, g, b));
        }

        // Gray levels are given as strings like "0.75"
        match trimmed.parse::<f64>() {
            Ok(level) if (0.0..=1.0).contains(&level) => Ok(Color::rgb(level, level, level)),
            _ => Err(invalid()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let [r, g, b, a] = match hex.len() {
        3 => [digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, 255],
        4 => [digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, digit(3)? * 17],
        6 => [pair(0)?, pair(2)?, pair(4)?, 255],
        8 => [pair(0)?, pair(2)?, pair(4)?, pair(6)?],
        _ => return None,
    };
    Some(Color::rgba(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}

impl From<(f64, f64, f64)> for Color {
    /// Opaque color from a rgb tuple
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(f64, f64, f64, f64)> for Color {
    /// Color from a rgba tuple
    fn from((r, g, b, a): (f64, f64, f64, f64)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl TryFrom<&str> for Color {
    type Error = StreamlineError;

    fn try_from(spec: &str) -> Result<Self> {
        spec.parse()
    }
}

/// Single letter shorthands followed by css names
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("b", [0, 0, 255]),
    ("g", [0, 128, 0]),
    ("r", [255, 0, 0]),
    ("c", [0, 191, 191]),
    ("m", [191, 0, 191]),
    ("y", [191, 191, 0]),
    ("k", [0, 0, 0]),
    ("w", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("silver", [192, 192, 192]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("olive", [128, 128, 0]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("maroon", [128, 0, 0]),
    ("lime", [0, 255, 0]),
    ("gold", [255, 215, 0]),
    ("indigo", [75, 0, 130]),
    ("violet", [238, 130, 238]),
    ("crimson", [220, 20, 60]),
    ("coral", [255, 127, 80]),
    ("salmon", [250, 128, 114]),
    ("tomato", [255, 99, 71]),
    ("firebrick", [178, 34, 34]),
    ("darkred", [139, 0, 0]),
    ("darkblue", [0, 0, 139]),
    ("darkgreen", [0, 100, 0]),
    ("darkorange", [255, 140, 0]),
    ("steelblue", [70, 130, 180]),
    ("skyblue", [135, 206, 235]),
    ("royalblue", [65, 105, 225]),
    ("midnightblue", [25, 25, 112]),
    ("forestgreen", [34, 139, 34]),
    ("seagreen", [46, 139, 87]),
    ("turquoise", [64, 224, 208]),
    ("khaki", [240, 230, 140]),
    ("beige", [245, 245, 220]),
    ("ivory", [255, 255, 240]),
    ("lavender", [230, 230, 250]),
    ("chocolate", [210, 105, 30]),
    ("tan", [210, 180, 140]),
];
