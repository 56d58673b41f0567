//! Recording drawing surface.

use folio_core::{DrawSurface, Rgb, Rgba};

/// One recorded draw call with its effective style resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Rgba,
        width: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_px: f64,
        color: Rgba,
    },
}

/// A [`DrawSurface`] that keeps the draw calls since the last clear.
///
/// Each section layer owns one; the canvas painter replays it every frame.
#[derive(Debug, Clone)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
    fill: Rgba,
    stroke: Rgba,
    line_width: f64,
    global_alpha: f64,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            fill: Rgba::opaque(Rgb::new(0, 0, 0)),
            stroke: Rgba::opaque(Rgb::new(0, 0, 0)),
            line_width: 1.0,
            global_alpha: 1.0,
        }
    }

    /// Recorded commands in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current global alpha.
    pub fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    fn effective(&self, color: Rgba) -> Rgba {
        color.scale_alpha(self.global_alpha)
    }
}

impl DrawSurface for DisplayList {
    fn clear_rect(&mut self) {
        self.commands.clear();
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        let color = self.effective(self.fill);
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let color = self.effective(self.stroke);
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width: self.line_width,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font_px: f64) {
        let color = self.effective(self.fill);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_px,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_commands() {
        let mut list = DisplayList::new();
        list.fill_circle(1.0, 2.0, 3.0);
        list.stroke_line(0.0, 0.0, 1.0, 1.0);
        assert_eq!(list.commands().len(), 2);

        list.clear_rect();
        assert!(list.is_empty());
    }

    #[test]
    fn test_global_alpha_scales_fill() {
        let red = Rgb::new(255, 0, 0);
        let mut list = DisplayList::new();
        list.set_fill_color(red.with_alpha(0.6));
        list.set_global_alpha(0.5);
        list.fill_text("x", 0.0, 0.0, 14.0);
        list.set_global_alpha(1.0);
        list.fill_circle(0.0, 0.0, 1.0);

        match &list.commands()[0] {
            DrawCommand::Text { color, .. } => assert!((color.alpha - 0.3).abs() < 1e-12),
            other => panic!("unexpected command {other:?}"),
        }
        match &list.commands()[1] {
            DrawCommand::Circle { color, .. } => assert!((color.alpha - 0.6).abs() < 1e-12),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_stroke_keeps_line_width() {
        let mut list = DisplayList::new();
        list.set_line_width(0.5);
        list.stroke_line(0.0, 0.0, 3.0, 4.0);
        assert!(matches!(
            list.commands()[0],
            DrawCommand::Line { width, .. } if width == 0.5
        ));
    }
}
