//! Immediate-mode 2D drawing surface.

use crate::color::Rgba;

/// A 2D immediate-mode drawing context measured in virtual pixels.
///
/// Style setters affect every following draw call until changed again.
/// The effective alpha of a shape is its color alpha multiplied by the
/// current global alpha.
pub trait DrawSurface {
    /// Erase everything drawn so far.
    fn clear_rect(&mut self);

    fn set_fill_color(&mut self, color: Rgba);

    fn set_stroke_color(&mut self, color: Rgba);

    fn set_line_width(&mut self, width: f64);

    fn set_global_alpha(&mut self, alpha: f64);

    /// Fill a circle of radius `radius` centered on `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Draw monospace text with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64);
}
