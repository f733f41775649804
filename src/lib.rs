//! Tag Flow - wrapped flow layout for tag chips
//!
//! This library measures short text labels into rounded chips, wraps them
//! into lines inside a fixed-width container, and paints the result onto a
//! drawing surface. [`TagFlow`] keeps the last layout around so that
//! re-binding an identical label set costs nothing but a comparison.
//!
//! # Example
//!
//! ```rust
//! use tag_flow::{render, RenderConfig};
//!
//! let svg = render(&["rust", "layout"], &RenderConfig::default());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("layout"));
//! ```

pub mod error;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod widget;

pub use error::StyleError;
pub use layout::{
    Chip, EstimatedMetrics, Font, FontMetrics, Insets, LayoutResult, MeasureSpec, Size,
    TextMetrics,
};
pub use renderer::{Surface, SvgConfig, SvgSurface};
pub use style::TagStyle;
pub use widget::{Invalidation, TagFlow};

/// Default container width for the render pipeline
pub const DEFAULT_WIDTH: f64 = 360.0;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Chip and container style
    pub style: TagStyle,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Width constraint offered to the flow
    pub width: MeasureSpec,
    /// Height constraint offered to the flow
    pub height: MeasureSpec,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: TagStyle::default(),
            svg: SvgConfig::default(),
            width: MeasureSpec::AtMost(DEFAULT_WIDTH),
            height: MeasureSpec::Unspecified,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style
    pub fn with_style(mut self, style: TagStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the width constraint
    pub fn with_width(mut self, width: MeasureSpec) -> Self {
        self.width = width;
        self
    }

    /// Set the height constraint
    pub fn with_height(mut self, height: MeasureSpec) -> Self {
        self.height = height;
        self
    }
}

/// Render labels to SVG, measuring text with [`EstimatedMetrics`]
///
/// # Example
///
/// ```rust
/// use tag_flow::{render, MeasureSpec, RenderConfig, TagStyle};
///
/// let config = RenderConfig::new()
///     .with_style(TagStyle::new().with_radius(6.0).with_divider(4.0))
///     .with_width(MeasureSpec::Exact(120.0));
///
/// let svg = render(&["alpha", "beta", "gamma"], &config);
/// assert!(svg.contains(r#"width="120""#));
/// ```
pub fn render<S: AsRef<str>>(labels: &[S], config: &RenderConfig) -> String {
    render_with_metrics(labels, config, EstimatedMetrics::default())
}

/// Render labels to SVG with a custom metrics provider
pub fn render_with_metrics<S, M>(labels: &[S], config: &RenderConfig, metrics: M) -> String
where
    S: AsRef<str>,
    M: TextMetrics,
{
    let mut flow = TagFlow::with_metrics(config.style.clone(), metrics);
    flow.set_labels(labels);
    let size = flow.measure(config.width, config.height);

    let mut surface = SvgSurface::new(config.svg.clone());
    flow.paint(&mut surface);
    surface.finish(size)
}
