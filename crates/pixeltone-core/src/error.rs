//! Error types for the editing core.

/// Errors raised by the pixel-transform pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{name} must be within [{min}, {max}], got {value}")]
    InvalidParameter {
        name: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("failed to allocate {bytes} bytes for the output image")]
    ResourceExhausted { bytes: usize },
    #[error("unknown color filter: {0:?}")]
    UnknownFilter(String),
    #[error("unknown rounding mode {0:?}, expected truncate or nearest")]
    UnknownRounding(String),
}

/// Errors raised while decoding or encoding image files.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("unsupported output format: {0:?}")]
    UnsupportedFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Image(#[from] EditError),
}

/// Errors raised while reading or writing parameter presets.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid preset: {0}")]
    Invalid(#[from] EditError),
}

/// Errors raised by [`EditorSession`](crate::session::EditorSession).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no image loaded, load an image first")]
    NoImage,
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}
