//! Turning labels into measured chips

use crate::style::TagStyle;

use super::chip::Chip;
use super::metrics::TextMetrics;

/// Measure each label into a chip, preserving order.
///
/// Labels past `style.max_tags` are dropped before measurement.
pub fn build_chips<S, M>(labels: &[S], style: &TagStyle, metrics: &M) -> Vec<Chip>
where
    S: AsRef<str>,
    M: TextMetrics + ?Sized,
{
    let kept = style.max_tags.map_or(labels.len(), |max| max.min(labels.len()));
    labels[..kept]
        .iter()
        .map(|label| Chip::measure(label.as_ref(), style, metrics))
        .collect()
}

/// Height of one line of chips: font line height plus vertical padding
pub fn row_height<M: TextMetrics + ?Sized>(style: &TagStyle, metrics: &M) -> f64 {
    metrics.font_metrics(&style.font()).line_height() + style.padding.vertical()
}
