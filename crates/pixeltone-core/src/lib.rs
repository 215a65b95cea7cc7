//! Pixeltone Core — domain layer for brightness, contrast and color filters.
//!
//! This crate contains the pixel-transform pipeline, the headless editing
//! session, and the codec and preset bridges. No UI dependencies.

pub mod adjust;
pub mod codec;
pub mod error;
pub mod image;
pub mod parallel;
pub mod pipeline;
pub mod preset;
pub mod session;

// Re-exports for convenience.
pub use adjust::channel::{Rounding, clamp_channel};
pub use adjust::filter::{ColorFilter, FilterSet, composite};
pub use adjust::tone::{ToneParams, adjust};
pub use codec::{load_image, save_image};
pub use error::{CodecError, EditError, PresetError, SessionError};
pub use crate::image::{ImageBuffer, Rgba8};
pub use pipeline::params::EditParams;
pub use pipeline::render::render;
pub use preset::{load_preset, save_preset};
pub use session::{EditCommand, EditorSession};
