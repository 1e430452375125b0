//! Font metric abstractions.
//!
//! Positions expressed in "characters" are scaled by the width of the letter
//! `x` and by the line spacing of the figure's reference font. The conversion
//! core only needs those two numbers, so it asks a `MetricsProvider` for them
//! instead of depending on a font stack.

use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

/// Pixels per typographic point at 96 dpi.
pub const PIXELS_PER_POINT: f64 = 96.0 / 72.0;

#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font not found: {family} {point_size}pt")]
    NotFound { family: String, point_size: u32 },

    #[error("Font '{family}' has no glyph for '{glyph}'")]
    MissingGlyph { family: String, glyph: char },

    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// The font used to interpret character units and written into the `.ui` window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub point_size: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, point_size: u32) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }

    /// Nominal em size in pixels.
    pub fn pixel_size(&self) -> f64 {
        self.point_size as f64 * PIXELS_PER_POINT
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("MS Sans Serif", 8)
    }
}

/// Metrics of one font, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontMetrics {
    /// Horizontal advance of the glyph `x`.
    pub x_advance: f64,
    /// Distance between two consecutive baselines.
    pub line_spacing: f64,
}

impl FontMetrics {
    pub fn new(x_advance: f64, line_spacing: f64) -> Self {
        Self {
            x_advance,
            line_spacing,
        }
    }

    /// Rough metrics for a proportional sans-serif face when no font is available.
    pub fn approximate(point_size: u32) -> Self {
        let px = point_size as f64 * PIXELS_PER_POINT;
        Self {
            x_advance: (px * 0.5).round().max(1.0),
            line_spacing: (px * 1.2).round().max(1.0),
        }
    }
}

/// A source of font metrics.
pub trait MetricsProvider: Send + Sync + Debug {
    fn metrics(&self, font: &FontSpec) -> Result<FontMetrics, FontError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// Answers every query with the same metrics. Deterministic; used by tests
/// and by the CLI's `--fixed-metrics` mode.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetricsProvider {
    metrics: FontMetrics,
}

impl FixedMetricsProvider {
    pub fn new(metrics: FontMetrics) -> Self {
        Self { metrics }
    }
}

impl Default for FixedMetricsProvider {
    fn default() -> Self {
        Self::new(FontMetrics::approximate(FontSpec::default().point_size))
    }
}

impl MetricsProvider for FixedMetricsProvider {
    fn metrics(&self, _font: &FontSpec) -> Result<FontMetrics, FontError> {
        Ok(self.metrics)
    }

    fn name(&self) -> &'static str {
        "FixedMetricsProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_spec() {
        let font = FontSpec::default();
        assert_eq!(font.family, "MS Sans Serif");
        assert_eq!(font.point_size, 8);
    }

    #[test]
    fn test_points_per_inch_from_crate_root() {
        assert_eq!(crate::PIXELS_PER_POINT * 72.0, 96.0);
    }

    #[test]
    fn test_pixel_size() {
        assert_eq!(FontSpec::new("Arial", 9).pixel_size(), 12.0);
    }

    #[test]
    fn test_approximate_metrics_are_whole_pixels() {
        let metrics = FontMetrics::approximate(9);
        assert_eq!(metrics.x_advance, 6.0);
        assert_eq!(metrics.line_spacing, 14.0);
    }

    #[test]
    fn test_fixed_provider_ignores_font() {
        let provider = FixedMetricsProvider::new(FontMetrics::new(7.0, 15.0));
        let metrics = provider.metrics(&FontSpec::new("Anything", 42)).unwrap();
        assert_eq!(metrics, FontMetrics::new(7.0, 15.0));
    }
}
