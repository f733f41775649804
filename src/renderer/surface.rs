//! The drawing surface the renderer paints onto

use crate::layout::{Font, Rect};

/// A 2D drawing target with a save/restore transform stack.
///
/// Coordinates passed to the drawing calls are relative to the current
/// translation. `restore` undoes every `translate` and `clip_rect` since the
/// matching `save`.
pub trait Surface {
    /// Push the current translation and clip
    fn save(&mut self);

    /// Pop back to the state of the matching `save`
    fn restore(&mut self);

    /// Move the origin
    fn translate(&mut self, dx: f64, dy: f64);

    /// Restrict further drawing to `rect`
    fn clip_rect(&mut self, rect: Rect);

    /// Fill a rectangle with rounded corners
    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: &str);

    /// Draw a single line of text with its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: f64, baseline: f64, font: &Font, color: &str);
}
