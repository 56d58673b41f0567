//! Code rain animation: snippets of source drifting down the hero.

use std::fmt::Debug;

use folio_core::{DrawSurface, Rgb, Rgba};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::animation_loop::Animation;
use crate::palette::{CODE_COLOR_ALPHA, CODE_COLORS, CODE_SNIPPETS};

/// Lines alive at any time.
pub const CODE_LINE_COUNT: usize = 15;

/// Distance past the bottom edge before a line recycles, and above the
/// top edge where it restarts.
pub const RECYCLE_MARGIN: f64 = 50.0;

/// Font size for every line.
pub const CODE_FONT_PX: f64 = 14.0;

/// State for a single drifting line of code.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeLine {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    /// Pixels per frame.
    pub speed: f64,
    pub opacity: f64,
    pub color: Rgba,
}

fn pick<R: Rng, T: Copy>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

/// Create the full set of lines for the given dimensions.
pub fn init_lines<R: Rng>(width: f64, height: f64, rng: &mut R) -> Vec<CodeLine> {
    (0..CODE_LINE_COUNT)
        .map(|_| CodeLine {
            text: pick(rng, CODE_SNIPPETS),
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            speed: rng.random::<f64>() * 0.5 + 0.2,
            opacity: rng.random::<f64>() * 0.3 + 0.1,
            color: pick::<_, Rgb>(rng, CODE_COLORS).with_alpha(CODE_COLOR_ALPHA),
        })
        .collect()
}

/// Move lines down one frame, recycling those past the bottom edge.
///
/// A recycled line gets a new column and snippet but keeps its speed,
/// opacity and color.
pub fn update<R: Rng>(lines: &mut [CodeLine], width: f64, height: f64, rng: &mut R) {
    for line in lines {
        line.y += line.speed;
        if line.y > height + RECYCLE_MARGIN {
            line.y = -RECYCLE_MARGIN;
            line.x = rng.random::<f64>() * width;
            line.text = pick(rng, CODE_SNIPPETS);
        }
    }
}

/// Draw every line with its own opacity, restoring full opacity after each.
pub fn render(surface: &mut dyn DrawSurface, lines: &[CodeLine]) {
    surface.clear_rect();
    for line in lines {
        surface.set_fill_color(line.color);
        surface.set_global_alpha(line.opacity);
        surface.fill_text(line.text, line.x, line.y, CODE_FONT_PX);
        surface.set_global_alpha(1.0);
    }
}

/// The hero's code rain layer.
#[derive(Debug)]
pub struct CodeRainField<R: Rng = StdRng> {
    lines: Vec<CodeLine>,
    width: f64,
    height: f64,
    rng: R,
}

impl CodeRainField<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for CodeRainField<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CodeRainField<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            lines: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    pub fn lines(&self) -> &[CodeLine] {
        &self.lines
    }
}

impl<R: Rng + Debug> Animation for CodeRainField<R> {
    fn configure(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.lines = init_lines(width, height, &mut self.rng);
    }

    fn advance(&mut self) {
        update(&mut self.lines, self.width, self.height, &mut self.rng);
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        render(surface, &self.lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::{DisplayList, DrawCommand};

    #[test]
    fn test_init_creates_fifteen_lines() {
        let mut rng = StdRng::seed_from_u64(1);
        let lines = init_lines(800.0, 600.0, &mut rng);
        assert_eq!(lines.len(), CODE_LINE_COUNT);

        for line in &lines {
            assert!(CODE_SNIPPETS.contains(&line.text));
            assert!(CODE_COLORS.contains(&line.color.rgb));
            assert!(line.x >= 0.0 && line.x < 800.0);
            assert!(line.y >= 0.0 && line.y < 600.0);
            assert!(line.speed >= 0.2 && line.speed < 0.7);
            assert!(line.opacity >= 0.1 && line.opacity < 0.4);
        }
    }

    #[test]
    fn test_recycle_keeps_speed_opacity_color() {
        let mut rng = StdRng::seed_from_u64(2);
        let color = Rgb::new(34, 197, 94).with_alpha(0.6);
        let mut lines = vec![CodeLine {
            text: CODE_SNIPPETS[0],
            x: 10.0,
            y: 149.9,
            speed: 0.5,
            opacity: 0.25,
            color,
        }];

        update(&mut lines, 400.0, 100.0, &mut rng);
        let line = &lines[0];
        assert_eq!(line.y, -RECYCLE_MARGIN);
        assert!(line.x >= 0.0 && line.x < 400.0);
        assert_eq!(line.speed, 0.5);
        assert_eq!(line.opacity, 0.25);
        assert_eq!(line.color, color);
    }

    #[test]
    fn test_line_exactly_at_margin_is_kept() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut lines = vec![CodeLine {
            text: CODE_SNIPPETS[1],
            x: 10.0,
            y: 149.5,
            speed: 0.5,
            opacity: 0.25,
            color: Rgb::new(0, 0, 0).with_alpha(0.6),
        }];
        update(&mut lines, 400.0, 100.0, &mut rng);
        assert_eq!(lines[0].y, 150.0);
        assert_eq!(lines[0].x, 10.0);
    }

    #[test]
    fn test_count_constant_over_many_frames() {
        let mut field = CodeRainField::seeded(9);
        field.configure(300.0, 120.0);
        for _ in 0..2_000 {
            field.advance();
            assert_eq!(field.lines().len(), CODE_LINE_COUNT);
            for line in field.lines() {
                assert!(line.y >= -RECYCLE_MARGIN && line.y <= 120.0 + RECYCLE_MARGIN);
            }
        }
    }

    #[test]
    fn test_opacity_does_not_leak() {
        let mut field = CodeRainField::seeded(4);
        field.configure(640.0, 480.0);

        let mut surface = DisplayList::new();
        field.render(&mut surface);
        assert_eq!(surface.global_alpha(), 1.0);

        let texts: Vec<_> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { color, font_px, .. } => Some((*color, *font_px)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), CODE_LINE_COUNT);

        for (line, (color, font_px)) in field.lines().iter().zip(texts) {
            assert!((color.alpha - CODE_COLOR_ALPHA * line.opacity).abs() < 1e-12);
            assert_eq!(font_px, CODE_FONT_PX);
        }

        // Later draws are unaffected
        surface.set_fill_color(Rgb::new(1, 1, 1).with_alpha(1.0));
        surface.fill_circle(0.0, 0.0, 1.0);
        assert!(matches!(
            surface.commands().last(),
            Some(DrawCommand::Circle { color, .. }) if color.alpha == 1.0
        ));
    }
}
