//! The stateful tag flow component
//!
//! [`TagFlow`] is what a host container embeds. It remembers the last label
//! set, the chips measured from it, the constraints of the last size
//! negotiation and the layout that came out of it, so that re-binding the same
//! labels (a recycled row in a scrolling list) costs a comparison and nothing
//! else.

use tracing::debug;

use crate::layout::{
    build_chips, compute, is_same, row_height, Chip, EstimatedMetrics, LayoutResult, MeasureSpec,
    Size, TextMetrics,
};
use crate::renderer::{paint, Surface};
use crate::style::TagStyle;

/// What the host has to do after a change to the component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidation {
    /// The bounding size is unchanged; redrawing is enough
    Repaint,
    /// The bounding size changed (or is not known yet); renegotiate size, then redraw
    Relayout,
}

/// A flow of tag chips with change tracking
#[derive(Debug, Clone)]
pub struct TagFlow<M = EstimatedMetrics> {
    style: TagStyle,
    metrics: M,
    labels: Vec<String>,
    chips: Vec<Chip>,
    constraints: Option<(MeasureSpec, MeasureSpec)>,
    layout: Option<LayoutResult>,
}

impl TagFlow {
    /// Create an empty flow measured with [`EstimatedMetrics`]
    pub fn new(style: TagStyle) -> Self {
        Self::with_metrics(style, EstimatedMetrics::default())
    }
}

impl Default for TagFlow {
    fn default() -> Self {
        Self::new(TagStyle::default())
    }
}

impl<M: TextMetrics> TagFlow<M> {
    /// Create an empty flow with a custom metrics provider
    pub fn with_metrics(style: TagStyle, metrics: M) -> Self {
        Self {
            style,
            metrics,
            labels: vec![],
            chips: vec![],
            constraints: None,
            layout: None,
        }
    }

    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    /// Labels from the last [`set_labels`](Self::set_labels), including any beyond `max_tags`
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The latest layout, if the component has been measured
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    /// Replace the label set.
    ///
    /// An identical sequence only asks for a repaint. A different one is
    /// measured and laid out against the last constraints; the host is asked
    /// to renegotiate size only when the bounding size actually changed.
    pub fn set_labels<S: AsRef<str>>(&mut self, labels: &[S]) -> Invalidation {
        if is_same(labels, &self.labels) {
            debug!(labels = labels.len(), "labels unchanged, skipping layout");
            return Invalidation::Repaint;
        }

        self.labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self.chips = build_chips(&self.labels, &self.style, &self.metrics);
        self.relayout()
    }

    /// Replace the style. Chips are rebuilt and the host always relays out.
    pub fn set_style(&mut self, style: TagStyle) -> Invalidation {
        self.style = style;
        self.chips = build_chips(&self.labels, &self.style, &self.metrics);
        self.relayout();
        Invalidation::Relayout
    }

    /// Negotiate size with the host.
    ///
    /// Repeated calls with the same constraints reuse the cached layout.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let constraints = (width_spec, height_spec);
        if self.constraints == Some(constraints) {
            if let Some(layout) = &self.layout {
                return layout.size();
            }
        }

        self.constraints = Some(constraints);
        let layout = self.run_pass(width_spec, height_spec);
        let size = layout.size();
        self.layout = Some(layout);
        size
    }

    /// Paint the latest layout. Does nothing before the first [`measure`](Self::measure).
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        if let Some(layout) = &self.layout {
            let font_metrics = self.metrics.font_metrics(&self.style.font());
            paint(layout, &self.style, &font_metrics, surface);
        }
    }

    fn relayout(&mut self) -> Invalidation {
        let Some((width_spec, height_spec)) = self.constraints else {
            self.layout = None;
            debug!(chips = self.chips.len(), "labels changed before first measure");
            return Invalidation::Relayout;
        };

        let previous = self.layout.as_ref().map(LayoutResult::size);
        let layout = self.run_pass(width_spec, height_spec);
        let size = layout.size();
        self.layout = Some(layout);

        if previous == Some(size) {
            debug!(width = size.width, height = size.height, "size unchanged after relayout");
            Invalidation::Repaint
        } else {
            debug!(width = size.width, height = size.height, "size changed after relayout");
            Invalidation::Relayout
        }
    }

    fn run_pass(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> LayoutResult {
        let row = row_height(&self.style, &self.metrics);
        compute(&self.chips, width_spec, height_spec, row, &self.style)
    }
}
