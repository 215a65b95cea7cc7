//! Row-parallel per-pixel mapping.
//!
//! Small images run on the calling thread; larger ones are split into rows
//! and handed to rayon. Each row writes its own disjoint output slice, so
//! the result is identical either way.

use rayon::prelude::*;

use crate::error::EditError;
use crate::image::{ImageBuffer, Rgba8, alloc_pixels};

/// Pixel count at which work moves to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

/// Map every pixel of `source` through `f` into a freshly allocated buffer.
///
/// Fails with [`EditError::ResourceExhausted`] if the output cannot be
/// allocated; nothing is produced in that case.
pub fn map_pixels<F>(source: &ImageBuffer, f: F) -> Result<ImageBuffer, EditError>
where
    F: Fn(Rgba8) -> Rgba8 + Sync,
{
    let (width, height) = source.dimensions();
    let src = source.pixels();
    let stride = width as usize;

    let mut out = alloc_pixels(src.len())?;
    out.resize(src.len(), Rgba8::default());

    if src.len() >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(stride)
            .zip(src.par_chunks(stride))
            .for_each(|(row_out, row_in)| map_row(row_in, row_out, &f));
    } else {
        for (row_out, row_in) in out.chunks_mut(stride).zip(src.chunks(stride)) {
            map_row(row_in, row_out, &f);
        }
    }

    Ok(ImageBuffer::from_parts(width, height, out))
}

#[inline]
fn map_row<F>(row_in: &[Rgba8], row_out: &mut [Rgba8], f: &F)
where
    F: Fn(Rgba8) -> Rgba8,
{
    for (dst, &px) in row_out.iter_mut().zip(row_in) {
        *dst = f(px);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_gradient(width: u32, height: u32) -> ImageBuffer {
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(Rgba8::rgba(
                    (x % 256) as u8,
                    (y % 256) as u8,
                    ((x + y) % 256) as u8,
                    ((x * y) % 256) as u8,
                ));
            }
        }
        ImageBuffer::new(width, height, pixels).unwrap()
    }

    fn invert(px: Rgba8) -> Rgba8 {
        px.with_channels(px.channels().map(|c| 255 - c))
    }

    #[test]
    fn test_parallel_path_matches_per_pixel_map() {
        let image = make_gradient(300, 300);
        assert!(image.pixels().len() >= PARALLEL_THRESHOLD);

        let result = map_pixels(&image, invert).unwrap();
        let expected: Vec<Rgba8> = image.pixels().iter().map(|&px| invert(px)).collect();
        assert_eq!(result.pixels(), expected.as_slice());
        assert_eq!(result.dimensions(), (300, 300));
    }

    #[test]
    fn test_sequential_path_matches_per_pixel_map() {
        let image = make_gradient(13, 7);
        let result = map_pixels(&image, invert).unwrap();
        let expected: Vec<Rgba8> = image.pixels().iter().map(|&px| invert(px)).collect();
        assert_eq!(result.pixels(), expected.as_slice());
    }

    #[test]
    fn test_single_column_image() {
        let image = make_gradient(1, 9);
        let result = map_pixels(&image, |px| px).unwrap();
        assert_eq!(result, image);
    }
}
