//! SVG output for painted tag flows

use crate::layout::{Font, Rect, Size};

use super::{Surface, SvgConfig};

#[derive(Debug, Clone, Copy)]
struct SavedState {
    origin: (f64, f64),
    open_groups: usize,
}

/// A [`Surface`] that records drawing calls as SVG elements.
///
/// Translations are folded into absolute coordinates; each clip opens a
/// `<g clip-path>` group that is closed again by the matching `restore`.
#[derive(Debug)]
pub struct SvgSurface {
    config: SvgConfig,
    origin: (f64, f64),
    stack: Vec<SavedState>,
    open_groups: usize,
    next_clip: usize,
    defs: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgSurface {
    /// Create an empty surface
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            origin: (0.0, 0.0),
            stack: vec![],
            open_groups: 0,
            next_clip: 0,
            defs: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn close_groups(&mut self, count: usize) {
        for _ in 0..count {
            self.indent = self.indent.saturating_sub(1);
            self.elements.push(format!("{}</g>", self.indent_str()));
        }
    }

    /// Close any open groups and produce the SVG document for a flow of `size`
    pub fn finish(mut self, size: Size) -> String {
        let pending = self.open_groups + self.stack.iter().map(|s| s.open_groups).sum::<usize>();
        self.close_groups(pending);

        let margin = self.config.margin;
        let min = 0.0 - margin;
        let width = size.width + 2.0 * margin;
        let height = size.height + 2.0 * margin;
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            width, height, min, min, width, height
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            let inner = if self.config.pretty_print { "    " } else { "" };
            svg.push_str(if self.config.pretty_print { "  <defs>" } else { "<defs>" });
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(inner);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(if self.config.pretty_print { "  </defs>" } else { "</defs>" });
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.stack.push(SavedState {
            origin: self.origin,
            open_groups: self.open_groups,
        });
        self.open_groups = 0;
    }

    fn restore(&mut self) {
        self.close_groups(self.open_groups);
        if let Some(state) = self.stack.pop() {
            self.origin = state.origin;
            self.open_groups = state.open_groups;
        } else {
            self.open_groups = 0;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn clip_rect(&mut self, rect: Rect) {
        let prefix = self.prefix();
        let id = format!("{}clip-{}", prefix, self.next_clip);
        self.next_clip += 1;

        let r = rect.offset(self.origin.0, self.origin.1);
        self.defs.push(format!(
            r#"<clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            id, r.x, r.y, r.width, r.height
        ));
        self.elements.push(format!(
            r#"{}<g clip-path="url(#{})">"#,
            self.indent_str(),
            id
        ));
        self.indent += 1;
        self.open_groups += 1;
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: &str) {
        let prefix = self.prefix();
        let r = rect.offset(self.origin.0, self.origin.1);
        let corners = if radius > 0.0 {
            format!(r#" rx="{}" ry="{}""#, radius, radius)
        } else {
            String::new()
        };

        self.elements.push(format!(
            r#"{}<rect class="{}chip" x="{}" y="{}" width="{}" height="{}"{} fill="{}"/>"#,
            self.indent_str(),
            prefix,
            r.x,
            r.y,
            r.width,
            r.height,
            corners,
            escape_xml(&svg_color(color))
        ));
    }

    fn draw_text(&mut self, text: &str, x: f64, baseline: f64, font: &Font, color: &str) {
        let prefix = self.prefix();
        let family = self
            .config
            .font_family
            .as_ref()
            .map(|f| format!(r#" font-family="{}""#, escape_xml(f)))
            .unwrap_or_default();

        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" font-size="{}"{} fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            self.origin.0 + x,
            self.origin.1 + baseline,
            font.size,
            family,
            escape_xml(&svg_color(color)),
            escape_xml(text)
        ));
    }
}

/// Styles carry alpha first (`#AARRGGBB`); SVG expects it last (`#RRGGBBAA`)
fn svg_color(color: &str) -> String {
    match color.strip_prefix('#') {
        Some(hex) if hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()) => {
            format!("#{}{}", &hex[2..], &hex[..2])
        }
        _ => color.to_string(),
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> SvgConfig {
        SvgConfig::new()
            .with_standalone(false)
            .with_pretty_print(false)
            .without_font_family()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_svg_color_moves_alpha_last() {
        assert_eq!(svg_color("#80FF0000"), "#FF000080");
        assert_eq!(svg_color("#F2F2F2"), "#F2F2F2");
        assert_eq!(svg_color("#abc"), "#abc");
        assert_eq!(svg_color("currentColor"), "currentColor");
    }

    #[test]
    fn test_alpha_colors_are_reordered_on_output() {
        let mut surface = SvgSurface::new(compact());
        surface.fill_round_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, "#80FF0000");
        surface.draw_text("x", 0.0, 8.0, &Font::new(10.0), "#FF0000FF");
        let svg = surface.finish(Size::new(10.0, 10.0));
        assert!(svg.contains(r##"fill="#FF000080"/>"##));
        assert!(svg.contains(r##"fill="#0000FFFF">x</text>"##));
    }

    #[test]
    fn test_translation_is_absolute() {
        let mut surface = SvgSurface::new(compact());
        surface.translate(10.0, 5.0);
        surface.fill_round_rect(Rect::new(0.0, 0.0, 20.0, 8.0), 0.0, "#fff");
        let svg = surface.finish(Size::new(30.0, 13.0));
        assert!(svg.contains(r##"<rect class="tag-chip" x="10" y="5" width="20" height="8" fill="#fff"/>"##));
    }

    #[test]
    fn test_radius_written_only_when_positive() {
        let mut surface = SvgSurface::new(compact());
        surface.fill_round_rect(Rect::new(0.0, 0.0, 20.0, 8.0), 4.0, "#fff");
        let svg = surface.finish(Size::new(20.0, 8.0));
        assert!(svg.contains(r#"rx="4" ry="4""#));
    }

    #[test]
    fn test_restore_undoes_translate_and_clip() {
        let mut surface = SvgSurface::new(compact());
        surface.save();
        surface.clip_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        surface.translate(7.0, 7.0);
        surface.restore();
        surface.draw_text("x", 1.0, 2.0, &Font::new(12.0), "#000");
        let svg = surface.finish(Size::new(50.0, 50.0));

        assert!(svg.contains(r#"<clipPath id="tag-clip-0">"#));
        assert!(svg.contains(r#"<g clip-path="url(#tag-clip-0)"></g>"#));
        assert!(svg.contains(r##"<text class="tag-label" x="1" y="2" font-size="12" fill="#000">x</text>"##));
    }

    #[test]
    fn test_finish_closes_dangling_groups() {
        let mut surface = SvgSurface::new(compact());
        surface.save();
        surface.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let svg = surface.finish(Size::new(10.0, 10.0));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
    }

    #[test]
    fn test_margin_expands_viewbox() {
        let surface = SvgSurface::new(compact().with_margin(5.0));
        let svg = surface.finish(Size::new(100.0, 40.0));
        assert!(svg.contains(r#"width="110" height="50" viewBox="-5 -5 110 50""#));
    }

    #[test]
    fn test_label_text_is_escaped() {
        let mut surface = SvgSurface::new(compact());
        surface.draw_text("R&D <x>", 0.0, 0.0, &Font::new(10.0), "#000");
        let svg = surface.finish(Size::zero());
        assert!(svg.contains(">R&amp;D &lt;x&gt;</text>"));
    }
}
