//! Background animation rendering for the folio page.
//!
//! This crate provides the decorative layers drawn behind each section:
//! a drifting particle field with proximity connections, and the hero's
//! code rain. Animations draw onto any [`DrawSurface`](folio_core::DrawSurface);
//! [`DisplayList`] records the calls and [`CanvasPainter`] replays them into
//! a terminal canvas.

mod animation_loop;
mod animations;
mod canvas;
mod display_list;
mod palette;

pub use animation_loop::{Animation, AnimationLoop, LoopState, SurfaceSize};
pub use animations::code_rain::{CODE_LINE_COUNT, CodeLine, CodeRainField};
pub use animations::particles::{Particle, ParticleField, connection_alpha};
pub use canvas::{CanvasPainter, Viewport};
pub use display_list::{DisplayList, DrawCommand};
pub use palette::{CODE_COLORS, CODE_SNIPPETS};
