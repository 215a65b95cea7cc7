//! Image representation for the editing pipeline.

use bytemuck::{Pod, Zeroable};
use image::RgbaImage;

use crate::error::EditError;

/// One 8-bit RGBA pixel.
///
/// `#[repr(C)]` with four `u8` fields, so a `[Rgba8]` slice can be viewed as
/// tightly packed RGBA bytes without copying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Opaque pixel from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color channels as `[R, G, B]`.
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Replace the color channels, keeping alpha.
    pub const fn with_channels(self, [r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b, a: self.a }
    }
}

/// Internal image representation. Row-major 8-bit RGBA.
///
/// A buffer always has non-zero dimensions and exactly `width × height`
/// pixels. Transforms never mutate a buffer; they return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl ImageBuffer {
    /// Build a buffer from row-major pixels.
    ///
    /// Fails with [`EditError::InvalidInput`] when either dimension is zero or
    /// the pixel count does not match the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self, EditError> {
        let expected = checked_pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(EditError::InvalidInput(
                "pixel count does not match image dimensions",
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Result<Self, EditError> {
        let count = checked_pixel_count(width, height)?;
        let mut pixels = alloc_pixels(count)?;
        pixels.resize(count, pixel);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer from a decoded `image` crate RGBA image.
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, EditError> {
        let (width, height) = image.dimensions();
        let pixels: &[Rgba8] = bytemuck::cast_slice(image.as_raw().as_slice());
        Self::new(width, height, pixels.to_vec())
    }

    /// Copy this buffer into an `image` crate RGBA image for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.width, self.height);
        out.copy_from_slice(self.as_bytes());
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Packed RGBA bytes, borrowed without copying.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Assemble a buffer from parts already known to satisfy the invariants.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgba8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// `width × height`, rejecting empty images and overflow.
fn checked_pixel_count(width: u32, height: u32) -> Result<usize, EditError> {
    if width == 0 || height == 0 {
        return Err(EditError::InvalidInput("image has zero dimensions"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(EditError::InvalidInput("image dimensions overflow"))
}

/// Reserve room for `count` pixels without aborting on allocation failure.
pub(crate) fn alloc_pixels(count: usize) -> Result<Vec<Rgba8>, EditError> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| EditError::ResourceExhausted {
            bytes: count.saturating_mul(std::mem::size_of::<Rgba8>()),
        })?;
    Ok(pixels)
}
