//! Configuration for SVG rendering

/// How an [`SvgSurface`](super::SvgSurface) writes its document
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Blank space added around the flow in the viewBox
    pub margin: f64,

    /// Start the document with an `<?xml ...?>` declaration
    pub standalone: bool,

    /// One element per line, nested groups indented
    pub pretty_print: bool,

    /// Prepended to the `chip` and `label` class names and to clip ids
    pub class_prefix: Option<String>,

    /// `font-family` written on every label
    pub font_family: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            margin: 0.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("tag-".to_string()),
            font_family: Some("sans-serif".to_string()),
        }
    }
}

impl SvgConfig {
    /// Standalone, indented output with the `tag-` prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Emit or omit the XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Indent the output or write it on one line
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Use another prefix for class names and clip ids
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Write bare `chip` and `label` classes
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the label font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Leave the font family to the viewer's default
    pub fn without_font_family(mut self) -> Self {
        self.font_family = None;
        self
    }
}
