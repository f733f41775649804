//! Chip and container styling
//!
//! A [`TagStyle`] is built once (in code, or from a TOML file) and shared
//! read-only by every chip in a layout pass. Missing TOML keys keep their
//! defaults, so a style file only needs to mention what it changes:
//!
//! ```toml
//! background = "#E3F2FD"
//! radius = 6
//! divider = 8
//! max_lines = 2
//! padding = { left = 10, top = 4, right = 10, bottom = 4 }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::StyleError;
use crate::layout::{Font, Insets};

/// Default chip background
pub const DEFAULT_BACKGROUND: &str = "#F2F2F2";

/// Default label color
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// Default font size in pixels
pub const DEFAULT_TEXT_SIZE: f64 = 15.0;

/// Visual and layout configuration for a tag flow
#[derive(Debug, Clone, PartialEq)]
pub struct TagStyle {
    /// Chip fill color
    pub background: String,
    /// Label color
    pub text_color: String,
    /// Font size in pixels
    pub text_size: f64,
    /// Corner radius of each chip
    pub radius: f64,
    /// Gap between adjacent chips on a line
    pub horizontal_divider: f64,
    /// Gap between adjacent lines
    pub vertical_divider: f64,
    /// Space between a chip's edge and its text
    pub padding: Insets,
    /// Space between the container's edge and the chips
    pub insets: Insets,
    /// Lines beyond this are laid out but neither painted nor counted in height
    pub max_lines: Option<usize>,
    /// Labels beyond this are dropped before measurement
    pub max_tags: Option<usize>,
}

impl Default for TagStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            text_size: DEFAULT_TEXT_SIZE,
            radius: 0.0,
            horizontal_divider: 0.0,
            vertical_divider: 0.0,
            padding: Insets::default(),
            insets: Insets::default(),
            max_lines: None,
            max_tags: None,
        }
    }
}

/// TOML structure for deserializing styles
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlStyle {
    background: Option<String>,
    text_color: Option<String>,
    text_size: Option<f64>,
    radius: Option<f64>,
    /// Shorthand for both dividers
    divider: Option<f64>,
    horizontal_divider: Option<f64>,
    vertical_divider: Option<f64>,
    padding: Option<Insets>,
    insets: Option<Insets>,
    max_lines: Option<usize>,
    max_tags: Option<usize>,
}

impl TagStyle {
    /// Create a style with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// The font labels are measured and drawn with
    pub fn font(&self) -> Font {
        Font::new(self.text_size)
    }

    /// Check that every value can be laid out
    pub fn validate(&self) -> Result<(), StyleError> {
        validate_color("background", &self.background)?;
        validate_color("text_color", &self.text_color)?;

        if !(self.text_size.is_finite() && self.text_size > 0.0) {
            return Err(StyleError::invalid(
                "text_size",
                format!("must be a positive number, got {}", self.text_size),
            ));
        }

        let lengths = [
            ("radius", self.radius),
            ("horizontal_divider", self.horizontal_divider),
            ("vertical_divider", self.vertical_divider),
            ("padding.left", self.padding.left),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
            ("insets.left", self.insets.left),
            ("insets.top", self.insets.top),
            ("insets.right", self.insets.right),
            ("insets.bottom", self.insets.bottom),
        ];
        for (field, value) in lengths {
            validate_length(field, value)?;
        }

        if self.max_lines == Some(0) {
            return Err(StyleError::invalid("max_lines", "must be at least 1"));
        }

        Ok(())
    }

    /// Convert density-independent lengths to device pixels.
    ///
    /// Every length is multiplied by `density` and rounded to the nearest
    /// whole pixel. Counts and colors are unchanged.
    pub fn scaled(&self, density: f64) -> Self {
        let px = |dp: f64| (dp * density).round();
        Self {
            text_size: px(self.text_size),
            radius: px(self.radius),
            horizontal_divider: px(self.horizontal_divider),
            vertical_divider: px(self.vertical_divider),
            padding: self.padding.scaled(density),
            insets: self.insets.scaled(density),
            ..self.clone()
        }
    }

    /// Set the chip background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the label color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the font size
    pub fn with_text_size(mut self, size: f64) -> Self {
        self.text_size = size;
        self
    }

    /// Set the corner radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set both dividers at once
    pub fn with_divider(mut self, divider: f64) -> Self {
        self.horizontal_divider = divider;
        self.vertical_divider = divider;
        self
    }

    /// Set the gap between chips on a line
    pub fn with_horizontal_divider(mut self, divider: f64) -> Self {
        self.horizontal_divider = divider;
        self
    }

    /// Set the gap between lines
    pub fn with_vertical_divider(mut self, divider: f64) -> Self {
        self.vertical_divider = divider;
        self
    }

    /// Set the text padding inside each chip
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the container insets
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Cap the number of painted lines
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Cap the number of laid out labels
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = Some(max_tags);
        self
    }
}

impl FromStr for TagStyle {
    type Err = StyleError;

    /// Parse a style from TOML, filling unset keys with defaults
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let parsed: TomlStyle = toml::from_str(content)?;
        let defaults = TagStyle::default();
        let divider = parsed.divider.unwrap_or(0.0);

        let style = TagStyle {
            background: parsed.background.unwrap_or(defaults.background),
            text_color: parsed.text_color.unwrap_or(defaults.text_color),
            text_size: parsed.text_size.unwrap_or(defaults.text_size),
            radius: parsed.radius.unwrap_or(defaults.radius),
            horizontal_divider: parsed.horizontal_divider.unwrap_or(divider),
            vertical_divider: parsed.vertical_divider.unwrap_or(divider),
            padding: parsed.padding.unwrap_or(defaults.padding),
            insets: parsed.insets.unwrap_or(defaults.insets),
            max_lines: parsed.max_lines.or(defaults.max_lines),
            max_tags: parsed.max_tags.or(defaults.max_tags),
        };
        style.validate()?;
        Ok(style)
    }
}

fn validate_length(field: &str, value: f64) -> Result<(), StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::invalid(
            field,
            format!("must be a non-negative number, got {}", value),
        ))
    }
}

/// Accepts `#rgb`, `#rrggbb` and `#aarrggbb`
fn validate_color(field: &str, color: &str) -> Result<(), StyleError> {
    let valid = color
        .strip_prefix('#')
        .filter(|hex| matches!(hex.len(), 3 | 6 | 8))
        .is_some_and(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(StyleError::invalid(
            field,
            format!("expected a hex color like #F2F2F2, got '{}'", color),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_style() {
        let style = TagStyle::default();
        assert_eq!(style.background, "#F2F2F2");
        assert_eq!(style.text_color, "#000000");
        assert_eq!(style.text_size, 15.0);
        assert_eq!(style.max_lines, None);
        assert_eq!(style.max_tags, None);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let style = TagStyle::new()
            .with_radius(4.0)
            .with_divider(6.0)
            .with_horizontal_divider(8.0)
            .with_max_lines(3);

        assert_eq!(style.radius, 4.0);
        assert_eq!(style.horizontal_divider, 8.0);
        assert_eq!(style.vertical_divider, 6.0);
        assert_eq!(style.max_lines, Some(3));
    }

    #[test]
    fn test_parse_partial_toml() {
        let style: TagStyle = r##"
background = "#E3F2FD"
radius = 6
divider = 8
vertical_divider = 4
max_lines = 2
padding = { left = 10, top = 4, right = 10, bottom = 4 }
"##
        .parse()
        .expect("Should parse");

        assert_eq!(style.background, "#E3F2FD");
        assert_eq!(style.text_color, DEFAULT_TEXT_COLOR);
        assert_eq!(style.radius, 6.0);
        assert_eq!(style.horizontal_divider, 8.0);
        assert_eq!(style.vertical_divider, 4.0);
        assert_eq!(style.max_lines, Some(2));
        assert_eq!(style.padding, Insets::new(10.0, 4.0, 10.0, 4.0));
        assert_eq!(style.insets, Insets::default());
    }

    #[test]
    fn test_partial_insets_table() {
        let style: TagStyle = "insets = { top = 3 }".parse().expect("Should parse");
        assert_eq!(style.insets, Insets::new(0.0, 3.0, 0.0, 0.0));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let style: TagStyle = "".parse().expect("Should parse");
        assert_eq!(style, TagStyle::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = "colour = \"#fff\"".parse::<TagStyle>();
        assert!(matches!(result, Err(StyleError::Parse(_))));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = "this is not valid toml {{{{".parse::<TagStyle>();
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_length_rejected() {
        let err = "radius = -2".parse::<TagStyle>().unwrap_err();
        assert_eq!(err.field(), Some("radius"));
    }

    #[test]
    fn test_negative_padding_rejected() {
        let err = "padding = { left = -1 }".parse::<TagStyle>().unwrap_err();
        assert_eq!(err.field(), Some("padding.left"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let err = "background = \"grey\"".parse::<TagStyle>().unwrap_err();
        assert_eq!(err.field(), Some("background"));

        assert!("text_color = \"#abc\"".parse::<TagStyle>().is_ok());
        assert!("text_color = \"#80FF0000\"".parse::<TagStyle>().is_ok());
        assert!("text_color = \"#12345\"".parse::<TagStyle>().is_err());
    }

    #[test]
    fn test_zero_max_lines_rejected() {
        let err = "max_lines = 0".parse::<TagStyle>().unwrap_err();
        assert_eq!(err.field(), Some("max_lines"));
    }

    #[test]
    fn test_zero_max_tags_allowed() {
        let style: TagStyle = "max_tags = 0".parse().expect("Should parse");
        assert_eq!(style.max_tags, Some(0));
    }

    #[test]
    fn test_scaled_rounds_to_pixels() {
        let style = TagStyle::default()
            .with_text_size(14.0)
            .with_radius(3.0)
            .with_divider(5.0)
            .with_padding(Insets::new(8.0, 2.0, 8.0, 2.0))
            .with_max_lines(2);

        let scaled = style.scaled(1.5);
        assert_eq!(scaled.text_size, 21.0);
        assert_eq!(scaled.radius, 5.0);
        assert_eq!(scaled.horizontal_divider, 8.0);
        assert_eq!(scaled.padding, Insets::new(12.0, 3.0, 12.0, 3.0));
        assert_eq!(scaled.max_lines, Some(2));
        assert_eq!(scaled.background, style.background);
    }

    #[test]
    fn test_from_missing_file() {
        let result = TagStyle::from_file(Path::new("/nonexistent/style.toml"));
        assert!(matches!(result, Err(StyleError::Io(_))));
    }
}
