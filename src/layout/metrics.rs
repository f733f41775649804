//! Text measurement
//!
//! The layout engine never touches glyphs itself. It asks a [`TextMetrics`]
//! provider for the advance width of a label and the vertical extent of the
//! font, and treats the answers as pure functions of their inputs.

/// An immutable font descriptor shared by measurement and painting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Font size in device pixels
    pub size: f64,
}

impl Font {
    pub fn new(size: f64) -> Self {
        Self { size }
    }
}

/// Vertical extent of a font relative to its baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the line box (negative, above baseline)
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line box (positive, below baseline)
    pub descent: f64,
}

impl FontMetrics {
    pub fn new(ascent: f64, descent: f64) -> Self {
        Self { ascent, descent }
    }

    /// Height of one line of text, rounded to whole pixels
    pub fn line_height(&self) -> f64 {
        (self.descent - self.ascent).round()
    }
}

/// Source of text measurements.
///
/// Implementations must return finite, non-negative widths; anything else
/// produces undefined geometry.
pub trait TextMetrics {
    /// Rendered advance width of `text` in `font`
    fn text_width(&self, text: &str, font: &Font) -> f64;

    /// Ascent and descent of `font`
    fn font_metrics(&self, font: &Font) -> FontMetrics;
}

impl<T: TextMetrics + ?Sized> TextMetrics for &T {
    fn text_width(&self, text: &str, font: &Font) -> f64 {
        (**self).text_width(text, font)
    }

    fn font_metrics(&self, font: &Font) -> FontMetrics {
        (**self).font_metrics(font)
    }
}

/// Measurement by estimation: every character advances by a fixed fraction
/// of the font size.
///
/// Good enough for proportional sans-serif fonts when no real shaper is
/// available, and exact for monospace ones with a matching ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMetrics {
    /// Advance per character as a fraction of the font size
    pub advance_ratio: f64,
    /// Ascent as a fraction of the font size (positive number)
    pub ascent_ratio: f64,
    /// Descent as a fraction of the font size
    pub descent_ratio: f64,
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            ascent_ratio: 0.95,
            descent_ratio: 0.25,
        }
    }
}

impl EstimatedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-character advance ratio
    pub fn with_advance_ratio(mut self, ratio: f64) -> Self {
        self.advance_ratio = ratio;
        self
    }
}

impl TextMetrics for EstimatedMetrics {
    fn text_width(&self, text: &str, font: &Font) -> f64 {
        text.chars().count() as f64 * font.size * self.advance_ratio
    }

    fn font_metrics(&self, font: &Font) -> FontMetrics {
        FontMetrics::new(-font.size * self.ascent_ratio, font.size * self.descent_ratio)
    }
}
