//! Edit pipeline — parameter definitions and rendering.

pub mod params;
pub mod render;
