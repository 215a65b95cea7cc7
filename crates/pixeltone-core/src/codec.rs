//! Image file loading and saving through the `image` crate.

use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::CodecError;
use crate::image::ImageBuffer;

/// Output formats the editor can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormatKind {
    Jpeg,
    Png,
    Bmp,
}

impl ImageFormatKind {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            _ => Err(CodecError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
        }
    }

    /// Whether the encoder keeps the alpha channel.
    pub const fn keeps_alpha(self) -> bool {
        matches!(self, Self::Png)
    }
}

/// Load an image from disk and convert it to 8-bit RGBA.
pub fn load_image(path: &Path) -> Result<ImageBuffer, CodecError> {
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => CodecError::Io(io),
        other => CodecError::Decode(other),
    })?;
    let buffer = ImageBuffer::from_rgba_image(&img.to_rgba8())?;
    tracing::info!(
        "loaded {} ({}x{})",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Encode `image` to `path`, choosing the format from the extension.
///
/// JPEG and BMP are written as RGB; alpha is dropped.
pub fn save_image(image: &ImageBuffer, path: &Path) -> Result<(), CodecError> {
    let kind = ImageFormatKind::from_path(path)?;
    let rgba = DynamicImage::ImageRgba8(image.to_rgba_image());
    let encoded = if kind.keeps_alpha() {
        rgba
    } else {
        DynamicImage::ImageRgb8(rgba.to_rgb8())
    };
    encoded
        .save_with_format(path, kind.image_format())
        .map_err(|e| match e {
            image::ImageError::IoError(io) => CodecError::Io(io),
            other => CodecError::Encode(other),
        })?;
    tracing::info!("saved {} as {:?}", path.display(), kind);
    Ok(())
}
