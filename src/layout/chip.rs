//! The laid-out record for a single label

use crate::style::TagStyle;

use super::metrics::TextMetrics;

/// One label measured against a style, with its position in the flow.
///
/// Chips never hold on to the style they were measured with; the style is
/// shared by every chip in a pass and handed to the renderer separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub text: String,
    /// Measured text advance
    pub content_width: f64,
    /// Rounded line height of the font
    pub content_height: f64,
    /// `content_width` plus left and right padding
    pub width: f64,
    /// `content_height` plus top and bottom padding
    pub height: f64,
    /// Zero-based line index
    pub line: usize,
    /// Zero-based position within the line
    pub column: usize,
}

impl Chip {
    /// Measure `text` with `style`'s font and padding. The chip starts at line 0, column 0.
    pub fn measure<M: TextMetrics + ?Sized>(text: &str, style: &TagStyle, metrics: &M) -> Self {
        let font = style.font();
        let content_width = metrics.text_width(text, &font);
        let content_height = metrics.font_metrics(&font).line_height();
        Self {
            text: text.to_string(),
            content_width,
            content_height,
            width: content_width + style.padding.horizontal(),
            height: content_height + style.padding.vertical(),
            line: 0,
            column: 0,
        }
    }

    /// A copy of this chip moved to another slot
    pub fn placed(&self, line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::metrics::EstimatedMetrics;
    use crate::layout::types::Insets;

    #[test]
    fn test_measure_adds_padding() {
        let style = TagStyle::default()
            .with_text_size(10.0)
            .with_padding(Insets::new(4.0, 2.0, 6.0, 3.0));
        let metrics = EstimatedMetrics::new().with_advance_ratio(1.0);

        let chip = Chip::measure("tag", &style, &metrics);
        assert_eq!(chip.content_width, 30.0);
        assert_eq!(chip.width, 40.0);
        assert_eq!(chip.content_height, 12.0);
        assert_eq!(chip.height, 17.0);
        assert_eq!((chip.line, chip.column), (0, 0));
    }

    #[test]
    fn test_empty_label_is_padding_only() {
        let style = TagStyle::default().with_padding(Insets::uniform(5.0));
        let chip = Chip::measure("", &style, &EstimatedMetrics::default());
        assert_eq!(chip.content_width, 0.0);
        assert_eq!(chip.width, 10.0);
    }

    #[test]
    fn test_placed_keeps_measurements() {
        let chip = Chip::measure("abc", &TagStyle::default(), &EstimatedMetrics::default());
        let moved = chip.placed(3, 1);
        assert_eq!(moved.line, 3);
        assert_eq!(moved.column, 1);
        assert_eq!(moved.width, chip.width);
        assert_eq!(moved.text, "abc");
    }
}
