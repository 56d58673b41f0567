//! Particle field tuning shared by every section.

use crate::color::Rgb;

/// Tuning constants for one section's particle field.
///
/// Each section differs from the others only in these values; the
/// simulation itself is shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// Upper cap on the particle count.
    pub max_count: usize,
    /// Square pixels of surface per particle.
    pub density_divisor: f64,
    /// Velocity components are drawn from `[-max_speed / 2, max_speed / 2]`.
    pub max_speed: f64,
    /// Smallest particle radius in pixels.
    pub min_size: f64,
    /// Largest particle radius in pixels.
    pub max_size: f64,
    /// Lowest particle opacity.
    pub min_opacity: f64,
    /// Opacity is drawn from `[min_opacity, min_opacity + opacity_spread]`.
    pub opacity_spread: f64,
    /// Pairs closer than this get a connecting line.
    pub connection_distance: f64,
    /// Particle fill color; alpha comes from each particle's opacity.
    pub particle_color: Rgb,
    /// Connection stroke color.
    pub line_color: Rgb,
    /// Connection alpha at zero distance.
    pub line_base_alpha: f64,
    /// Connection stroke width in pixels.
    pub line_width: f64,
}

/// Hard ceiling on particles per field. Connections are checked for every
/// pair each frame, so the count must stay small.
pub const MAX_PARTICLES: usize = 80;

/// Stroke width used by every preset.
pub const THIN_LINE: f64 = 0.5;

const BLUE: Rgb = Rgb::new(59, 130, 246);
const PURPLE: Rgb = Rgb::new(139, 92, 246);
const EMERALD: Rgb = Rgb::new(16, 185, 129);
const AMBER: Rgb = Rgb::new(251, 191, 36);
const PINK: Rgb = Rgb::new(236, 72, 153);
const GREEN: Rgb = Rgb::new(34, 197, 94);

impl FieldConfig {
    pub const HERO: Self = Self {
        max_count: 80,
        density_divisor: 8000.0,
        max_speed: 0.5,
        min_size: 1.0,
        max_size: 3.0,
        min_opacity: 0.2,
        opacity_spread: 0.4,
        connection_distance: 100.0,
        particle_color: BLUE,
        line_color: PURPLE,
        line_base_alpha: 0.2,
        line_width: THIN_LINE,
    };

    pub const ABOUT: Self = Self {
        max_count: 50,
        density_divisor: 15000.0,
        max_speed: 0.3,
        min_size: 0.5,
        max_size: 2.0,
        min_opacity: 0.1,
        opacity_spread: 0.3,
        connection_distance: 80.0,
        particle_color: BLUE,
        line_color: PURPLE,
        line_base_alpha: 0.1,
        line_width: THIN_LINE,
    };

    pub const PROJECTS: Self = Self {
        max_count: 60,
        density_divisor: 12000.0,
        max_speed: 0.4,
        min_size: 0.5,
        max_size: 2.5,
        min_opacity: 0.1,
        opacity_spread: 0.4,
        connection_distance: 90.0,
        particle_color: PURPLE,
        line_color: BLUE,
        line_base_alpha: 0.15,
        line_width: THIN_LINE,
    };

    pub const SKILLS: Self = Self {
        max_count: 70,
        density_divisor: 10000.0,
        max_speed: 0.3,
        min_size: 0.5,
        max_size: 2.0,
        min_opacity: 0.1,
        opacity_spread: 0.3,
        connection_distance: 85.0,
        particle_color: EMERALD,
        line_color: BLUE,
        line_base_alpha: 0.12,
        line_width: THIN_LINE,
    };

    pub const EDUCATION: Self = Self {
        max_count: 55,
        density_divisor: 13000.0,
        max_speed: 0.35,
        min_size: 0.5,
        max_size: 2.3,
        min_opacity: 0.1,
        opacity_spread: 0.35,
        connection_distance: 95.0,
        particle_color: AMBER,
        line_color: PURPLE,
        line_base_alpha: 0.13,
        line_width: THIN_LINE,
    };

    pub const CERTIFICATIONS: Self = Self {
        max_count: 65,
        density_divisor: 11000.0,
        max_speed: 0.4,
        min_size: 0.5,
        max_size: 2.5,
        min_opacity: 0.1,
        opacity_spread: 0.4,
        connection_distance: 88.0,
        particle_color: PINK,
        line_color: BLUE,
        line_base_alpha: 0.14,
        line_width: THIN_LINE,
    };

    pub const CONTACT: Self = Self {
        max_count: 60,
        density_divisor: 12000.0,
        max_speed: 0.3,
        min_size: 0.5,
        max_size: 2.0,
        min_opacity: 0.1,
        opacity_spread: 0.3,
        connection_distance: 90.0,
        particle_color: GREEN,
        line_color: BLUE,
        line_base_alpha: 0.12,
        line_width: THIN_LINE,
    };

    /// Number of particles for a surface of the given size.
    ///
    /// Degenerate surfaces (zero, negative or non-finite area) get none.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = width * height;
        if !area.is_finite() || area <= 0.0 || self.density_divisor <= 0.0 {
            return 0;
        }
        let cap = self.max_count.min(MAX_PARTICLES);
        let by_density = (area / self.density_divisor).floor();
        if by_density >= cap as f64 {
            cap
        } else {
            by_density as usize
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::HERO
    }
}
