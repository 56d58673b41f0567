//! Core types for the folio terminal portfolio.

mod color;
mod field;
mod section;
mod surface;

pub use color::{BACKDROP, Rgb, Rgba};
pub use field::{FieldConfig, MAX_PARTICLES, THIN_LINE};
pub use section::Section;
pub use surface::DrawSurface;
