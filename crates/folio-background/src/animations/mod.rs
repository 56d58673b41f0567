//! Background animations.

pub mod code_rain;
pub mod particles;
