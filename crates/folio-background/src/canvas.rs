//! Terminal rendering of recorded display lists.

use folio_core::{BACKDROP, Rgb, Rgba};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Widget,
        canvas::{Canvas, Circle, Context, Line},
    },
};

use crate::display_list::{DisplayList, DrawCommand};

/// The window of a surface (in virtual pixels) that is on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    /// First visible pixel row.
    pub top: f64,
    /// One past the last visible pixel row.
    pub bottom: f64,
}

impl Viewport {
    pub fn new(width: f64, top: f64, bottom: f64) -> Self {
        Self { width, top, bottom }
    }
}

/// Paints one or more display lists into a braille canvas.
///
/// Layers are painted in order, later ones on top. Line widths and font
/// sizes have no terminal equivalent and are ignored.
#[derive(Debug)]
pub struct CanvasPainter<'a> {
    layers: Vec<&'a DisplayList>,
    viewport: Viewport,
    backdrop: Rgb,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layers: Vec::new(),
            viewport,
            backdrop: BACKDROP,
        }
    }

    /// Add a layer above the existing ones.
    pub fn layer(mut self, list: &'a DisplayList) -> Self {
        self.layers.push(list);
        self
    }

    pub fn backdrop(mut self, backdrop: Rgb) -> Self {
        self.backdrop = backdrop;
        self
    }
}

/// Screen color for a translucent shape.
fn blend(color: Rgba, backdrop: Rgb) -> Color {
    color.over(backdrop).into()
}

fn paint_command(ctx: &mut Context<'_>, command: &DrawCommand, backdrop: Rgb) {
    // Surfaces grow downward, the canvas grows upward
    match command {
        DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        } => ctx.draw(&Circle {
            x: *x,
            y: -*y,
            radius: *radius,
            color: blend(*color, backdrop),
        }),
        DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            ..
        } => ctx.draw(&Line {
            x1: *x1,
            y1: -*y1,
            x2: *x2,
            y2: -*y2,
            color: blend(*color, backdrop),
        }),
        DrawCommand::Text {
            text, x, y, color, ..
        } => ctx.print(
            *x,
            -*y,
            TextLine::styled(text.clone(), Style::new().fg(blend(*color, backdrop))),
        ),
    }
}

impl Widget for CanvasPainter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Viewport { width, top, bottom } = self.viewport;
        let backdrop = self.backdrop;
        let layers = &self.layers;

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(backdrop.into())
            .x_bounds([0.0, width])
            .y_bounds([-bottom, -top])
            .paint(|ctx| {
                for (i, list) in layers.iter().enumerate() {
                    if i > 0 {
                        ctx.layer();
                    }
                    for command in list.commands() {
                        paint_command(ctx, command, backdrop);
                    }
                }
            })
            .render(area, buf);
    }
}
