//! Walking a layout and painting its chips

use crate::layout::{Chip, FontMetrics, LayoutResult, Rect};
use crate::style::TagStyle;

use super::Surface;

/// Paint every visible chip of `layout`.
///
/// Drawing is clipped to the container minus its insets. Chips are visited
/// in line order; painting stops at the first chip past the line cap.
pub fn paint<S: Surface + ?Sized>(
    layout: &LayoutResult,
    style: &TagStyle,
    font_metrics: &FontMetrics,
    surface: &mut S,
) {
    if layout.is_empty() {
        return;
    }

    let content = style
        .insets
        .inset(Rect::new(0.0, 0.0, layout.width, layout.height));
    let line_advance = layout.row_height + style.vertical_divider;

    surface.save();
    surface.clip_rect(content);
    surface.translate(content.x, content.y);

    let mut current_line = None;
    for chip in &layout.chips {
        if chip.line >= layout.visible_lines {
            break;
        }

        if current_line != Some(chip.line) {
            if current_line.is_some() {
                surface.restore();
            }
            surface.save();
            surface.translate(0.0, chip.line as f64 * line_advance);
            current_line = Some(chip.line);
        }

        render_chip(chip, style, font_metrics, surface);
        surface.translate(chip.width + style.horizontal_divider, 0.0);
    }

    if current_line.is_some() {
        surface.restore();
    }
    surface.restore();
}

/// Paint one chip with its top-left corner at the current origin
pub fn render_chip<S: Surface + ?Sized>(
    chip: &Chip,
    style: &TagStyle,
    font_metrics: &FontMetrics,
    surface: &mut S,
) {
    surface.fill_round_rect(
        Rect::new(0.0, 0.0, chip.width, chip.height),
        style.radius,
        &style.background,
    );
    surface.draw_text(
        &chip.text,
        style.padding.left,
        style.padding.top - font_metrics.ascent,
        &style.font(),
        &style.text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{
        build_chips, compute, row_height, EstimatedMetrics, Font, Insets, MeasureSpec, TextMetrics,
    };
    use pretty_assertions::assert_eq;

    /// Tracks the absolute origin and records where things are drawn
    #[derive(Default)]
    struct Recorder {
        origin: (f64, f64),
        stack: Vec<(f64, f64)>,
        clips: Vec<Rect>,
        rects: Vec<Rect>,
        texts: Vec<(String, f64, f64)>,
    }

    impl Surface for Recorder {
        fn save(&mut self) {
            self.stack.push(self.origin);
        }

        fn restore(&mut self) {
            self.origin = self.stack.pop().expect("unbalanced restore");
        }

        fn translate(&mut self, dx: f64, dy: f64) {
            self.origin.0 += dx;
            self.origin.1 += dy;
        }

        fn clip_rect(&mut self, rect: Rect) {
            self.clips.push(rect.offset(self.origin.0, self.origin.1));
        }

        fn fill_round_rect(&mut self, rect: Rect, _radius: f64, _color: &str) {
            self.rects.push(rect.offset(self.origin.0, self.origin.1));
        }

        fn draw_text(&mut self, text: &str, x: f64, baseline: f64, _font: &Font, _color: &str) {
            self.texts
                .push((text.to_string(), self.origin.0 + x, self.origin.1 + baseline));
        }
    }

    fn layout_for(labels: &[&str], style: &TagStyle, width: f64) -> (LayoutResult, FontMetrics) {
        let metrics = EstimatedMetrics::new().with_advance_ratio(1.0);
        let chips = build_chips(labels, style, &metrics);
        let row = row_height(style, &metrics);
        let layout = compute(&chips, MeasureSpec::Exact(width), MeasureSpec::Unspecified, row, style);
        (layout, metrics.font_metrics(&style.font()))
    }

    #[test]
    fn test_chips_positioned_by_line_and_column() {
        let style = TagStyle::default()
            .with_text_size(10.0)
            .with_horizontal_divider(5.0)
            .with_vertical_divider(3.0)
            .with_insets(Insets::new(2.0, 4.0, 2.0, 4.0));
        let (layout, fm) = layout_for(&["aa", "bbb", "cccc"], &style, 64.0);
        let mut surface = Recorder::default();
        paint(&layout, &style, &fm, &mut surface);

        // Line 0: 2 + 20 + 5 + 30 + 2 = 59 fits in 64, cccc wraps
        let origins: Vec<_> = surface.rects.iter().map(|r| (r.x, r.y)).collect();
        assert_eq!(origins, vec![(2.0, 4.0), (27.0, 4.0), (2.0, 19.0)]);
        assert_eq!(surface.clips, vec![Rect::new(2.0, 4.0, 60.0, 27.0)]);
        assert!(surface.stack.is_empty());
    }

    #[test]
    fn test_text_sits_on_baseline_inside_padding() {
        let style = TagStyle::default()
            .with_text_size(10.0)
            .with_padding(Insets::new(6.0, 2.0, 6.0, 2.0));
        let (layout, fm) = layout_for(&["tag"], &style, 200.0);
        let mut surface = Recorder::default();
        paint(&layout, &style, &fm, &mut surface);

        assert_eq!(surface.texts, vec![("tag".to_string(), 6.0, 2.0 + 9.5)]);
        assert_eq!(surface.rects, vec![Rect::new(0.0, 0.0, 42.0, 16.0)]);
    }

    #[test]
    fn test_stops_at_max_lines() {
        let style = TagStyle::default().with_text_size(10.0).with_max_lines(2);
        let (layout, fm) = layout_for(&["aaaa", "bbbb", "cccc", "dddd"], &style, 50.0);
        assert_eq!(layout.line_count, 4);

        let mut surface = Recorder::default();
        paint(&layout, &style, &fm, &mut surface);
        let painted: Vec<_> = surface.texts.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(painted, vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn test_empty_layout_paints_nothing() {
        let style = TagStyle::default();
        let (layout, fm) = layout_for(&[], &style, 100.0);
        let mut surface = Recorder::default();
        paint(&layout, &style, &fm, &mut surface);
        assert!(surface.clips.is_empty());
        assert!(surface.rects.is_empty());
    }
}
