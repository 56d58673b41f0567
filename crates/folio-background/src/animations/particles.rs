//! Drifting particle field with proximity connections.

use std::fmt::Debug;

use folio_core::{DrawSurface, FieldConfig};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::animation_loop::Animation;

/// One simulated point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius in pixels.
    pub size: f64,
    pub opacity: f64,
}

/// Uniform sample in `[low, low + span)`.
fn sample<R: Rng>(rng: &mut R, low: f64, span: f64) -> f64 {
    low + rng.random::<f64>() * span
}

/// Generate a fresh particle set for a `width` x `height` surface.
pub fn configure<R: Rng>(
    width: f64,
    height: f64,
    config: &FieldConfig,
    rng: &mut R,
) -> Vec<Particle> {
    if !(width > 0.0 && height > 0.0) {
        return Vec::new();
    }
    let count = config.particle_count(width, height);
    let half_speed = config.max_speed / 2.0;

    (0..count)
        .map(|_| Particle {
            x: sample(rng, 0.0, width),
            y: sample(rng, 0.0, height),
            vx: sample(rng, -half_speed, config.max_speed),
            vy: sample(rng, -half_speed, config.max_speed),
            size: sample(rng, config.min_size, config.max_size - config.min_size),
            opacity: sample(rng, config.min_opacity, config.opacity_spread),
        })
        .collect()
}

/// Move every particle one frame and bounce it off the surface edges.
///
/// The velocity flips but the position is not clamped, so a particle can
/// sit just outside the box for the reflecting frame.
pub fn advance(particles: &mut [Particle], width: f64, height: f64) {
    for p in particles {
        p.x += p.vx;
        p.y += p.vy;

        if p.x < 0.0 || p.x > width {
            p.vx = -p.vx;
        }
        if p.y < 0.0 || p.y > height {
            p.vy = -p.vy;
        }
    }
}

/// Alpha of a connection between two particles `distance` apart.
///
/// Decays linearly from `line_base_alpha` to zero at the threshold.
pub fn connection_alpha(distance: f64, config: &FieldConfig) -> f64 {
    if distance >= config.connection_distance {
        return 0.0;
    }
    config.line_base_alpha * (1.0 - distance / config.connection_distance)
}

/// Draw particles and their connections. Each pair is considered once.
pub fn render(surface: &mut dyn DrawSurface, particles: &[Particle], config: &FieldConfig) {
    surface.clear_rect();

    for p in particles {
        surface.set_fill_color(config.particle_color.with_alpha(p.opacity));
        surface.fill_circle(p.x, p.y, p.size);
    }

    surface.set_line_width(config.line_width);
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = (a.x - b.x).hypot(a.y - b.y);
            if distance < config.connection_distance {
                surface.set_stroke_color(
                    config
                        .line_color
                        .with_alpha(connection_alpha(distance, config)),
                );
                surface.stroke_line(a.x, a.y, b.x, b.y);
            }
        }
    }
}

/// A section's particle background.
#[derive(Debug)]
pub struct ParticleField<R: Rng = StdRng> {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: R,
}

impl ParticleField<StdRng> {
    /// Field seeded from OS entropy.
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Field with a fixed seed, for reproducible layouts.
    pub fn seeded(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Field drawing from the given random source.
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl<R: Rng + Debug> Animation for ParticleField<R> {
    fn configure(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        // Wholesale replacement; nothing carries over from the old set
        self.particles = configure(width, height, &self.config, &mut self.rng);
    }

    fn advance(&mut self) {
        advance(&mut self.particles, self.width, self.height);
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        render(surface, &self.particles, &self.config);
    }
}
