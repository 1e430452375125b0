//! Resolution of figure positions into target pixel rectangles.
//!
//! Figure positions are `[left, bottom, width, height]` in one of several
//! unit systems with the origin at the bottom-left of the enclosing
//! container. The target grammar uses whole pixels with a top-left origin,
//! so the vertical axis is flipped against a reference height.

use fig2ui_traits::{FontMetrics, PIXELS_PER_POINT};
use fig2ui_types::Rect;

/// Pixels per inch.
pub const PIXELS_PER_INCH: f64 = 96.0;
/// Pixels per centimeter, as the legacy toolkit measures it.
pub const PIXELS_PER_CENTIMETER: f64 = 243.84;

/// Measurement units of a figure position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    /// Multiples of the reference font's `x` advance and line spacing.
    Characters,
    Pixels,
    Inches,
    Centimeters,
    Points,
}

impl Units {
    pub fn parse(value: &str) -> Option<Units> {
        match value {
            "characters" => Some(Units::Characters),
            "pixels" => Some(Units::Pixels),
            "inches" => Some(Units::Inches),
            "centimeters" => Some(Units::Centimeters),
            "points" => Some(Units::Points),
            _ => None,
        }
    }

    pub fn scale(self, metrics: &FontMetrics) -> Scale {
        match self {
            Units::Characters => Scale::new(metrics.x_advance, metrics.line_spacing),
            Units::Pixels => Scale::uniform(1.0),
            Units::Inches => Scale::uniform(PIXELS_PER_INCH),
            Units::Centimeters => Scale::uniform(PIXELS_PER_CENTIMETER),
            Units::Points => Scale::uniform(PIXELS_PER_POINT),
        }
    }
}

/// Pixels per unit along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Scale {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn uniform(factor: f64) -> Self {
        Self::new(factor, factor)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// A figure position in source units, bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Position {
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Reads the first four values; `None` if there are fewer.
    pub fn from_values(values: &[f64]) -> Option<Position> {
        match values {
            [left, bottom, width, height, ..] => Some(Self::new(*left, *bottom, *width, *height)),
            _ => None,
        }
    }

    /// Resolved height in pixels, independent of any reference height.
    pub fn pixel_height(&self, scale: Scale) -> i32 {
        ceil_px(self.height * scale.vertical)
    }
}

/// Converts a position into a top-left-origin pixel rectangle.
///
/// `reference_height` is the pixel height of the enclosing container.
pub fn resolve(position: &Position, scale: Scale, reference_height: i32) -> Rect {
    let top = f64::from(reference_height) - (position.bottom + position.height) * scale.vertical;
    Rect::new(
        ceil_px(position.left * scale.horizontal),
        ceil_px(top.abs()),
        ceil_px(position.width * scale.horizontal),
        position.pixel_height(scale),
    )
}

fn ceil_px(value: f64) -> i32 {
    // `as` saturates and maps NaN to 0.
    value.ceil() as i32
}
