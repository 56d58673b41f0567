//! Color types shared by the drawing surfaces.

use ratatui::style::Color;

/// Page backdrop (the dark slate behind every section).
pub const BACKDROP: Rgb = Rgb::new(17, 24, 39);

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel.
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba::new(self, alpha)
    }

    /// Linear interpolation between two colors, `t` clamped to 0..1.
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| -> u8 {
            (x as f64 + (y as f64 - x as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// An RGB color with a straight (non-premultiplied) alpha in 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    /// Create a color; alpha is clamped to 0..1.
    pub fn new(rgb: Rgb, alpha: f64) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Fully opaque color.
    pub fn opaque(rgb: Rgb) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    /// Multiply the alpha channel by `factor`.
    pub fn scale_alpha(self, factor: f64) -> Self {
        Self::new(self.rgb, self.alpha * factor)
    }

    /// Composite this color over an opaque backdrop.
    ///
    /// Terminals have no per-cell alpha, so transparency is approximated by
    /// mixing toward whatever sits behind the shape.
    pub fn over(self, backdrop: Rgb) -> Rgb {
        Rgb::lerp(backdrop, self.rgb, self.alpha)
    }
}
