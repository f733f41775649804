//! Core geometry types for the flow layout

use serde::Deserialize;

use super::chip::Chip;

/// A width/height pair in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a zero-sized value
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Move the rectangle by an offset
    pub fn offset(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Space reserved on each side of a box.
///
/// Used both for the padding around a chip's text and for the insets of
/// the whole container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same value on all four sides
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Shrink a rectangle by these insets, clamping at zero size
    pub fn inset(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x + self.left,
            rect.y + self.top,
            (rect.width - self.horizontal()).max(0.0),
            (rect.height - self.vertical()).max(0.0),
        )
    }

    pub(crate) fn scaled(&self, factor: f64) -> Insets {
        Insets::new(
            (self.left * factor).round(),
            (self.top * factor).round(),
            (self.right * factor).round(),
            (self.bottom * factor).round(),
        )
    }
}

/// The constraint a host places on one axis during size negotiation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasureSpec {
    /// The host dictates the size
    Exact(f64),
    /// The content may use up to this much space
    AtMost(f64),
    /// No constraint; the content picks its natural size
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Space available for content on this axis
    pub fn available(&self) -> f64 {
        match self {
            MeasureSpec::Exact(size) | MeasureSpec::AtMost(size) => *size,
            MeasureSpec::Unspecified => f64::INFINITY,
        }
    }

    /// Pick the final size on this axis given the content's natural size
    pub fn resolve(&self, natural: f64) -> f64 {
        match self {
            MeasureSpec::Exact(size) => *size,
            MeasureSpec::AtMost(max) => natural.min(*max),
            MeasureSpec::Unspecified => natural,
        }
    }
}

/// The output of one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Chips in label order with line and column assigned
    pub chips: Vec<Chip>,
    /// Resolved bounding width
    pub width: f64,
    /// Resolved bounding height
    pub height: f64,
    /// Width the content would take if unconstrained by the host
    pub natural_width: f64,
    /// Height of the visible lines plus insets
    pub natural_height: f64,
    /// Lines actually used by the greedy pass, ignoring the line cap
    pub line_count: usize,
    /// Lines that will be painted (`min(line_count, max_lines)`)
    pub visible_lines: usize,
    /// Height of a single line of chips
    pub row_height: f64,
}

impl LayoutResult {
    /// An empty layout for the given constraints
    pub fn empty(width_spec: MeasureSpec, height_spec: MeasureSpec, row_height: f64) -> Self {
        Self {
            chips: vec![],
            width: width_spec.resolve(0.0),
            height: height_spec.resolve(0.0),
            natural_width: 0.0,
            natural_height: 0.0,
            line_count: 0,
            visible_lines: 0,
            row_height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Chips that fall within the visible line cap
    pub fn visible_chips(&self) -> impl Iterator<Item = &Chip> {
        let visible = self.visible_lines;
        self.chips.iter().take_while(move |chip| chip.line < visible)
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}
