//! Flow layout engine for tag chips
//!
//! Labels are measured into [`Chip`]s, broken into lines greedily, and the
//! bounding size of the result is resolved against the host's
//! [`MeasureSpec`]s. Every pass produces a new [`LayoutResult`].

pub mod change;
pub mod chip;
pub mod engine;
pub mod flow;
pub mod measure;
pub mod metrics;
pub mod size;
pub mod types;

pub use change::is_same;
pub use chip::Chip;
pub use engine::compute;
pub use flow::{assign_lines, LineAssignment};
pub use measure::{build_chips, row_height};
pub use metrics::{EstimatedMetrics, Font, FontMetrics, TextMetrics};
pub use size::{effective_lines, natural_height, resolve_size};
pub use types::*;
