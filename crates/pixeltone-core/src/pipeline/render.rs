//! Full edit evaluation — tone adjustment followed by color filters.

use std::time::Instant;

use crate::adjust::filter::apply_filters;
use crate::adjust::tone::adjust_pixel;
use crate::error::EditError;
use crate::image::{ImageBuffer, Rgba8};
use crate::parallel;
use crate::pipeline::params::EditParams;

/// Apply the complete edit chain to a single pixel:
/// 1. Brightness offset
/// 2. Contrast scale
/// 3. Enabled color filters in composition order
#[inline]
pub fn render_pixel(px: Rgba8, params: &EditParams) -> Rgba8 {
    apply_filters(adjust_pixel(px, &params.tone), &params.filters)
}

/// Render `source` with `params` into a new buffer.
///
/// Equivalent to [`adjust`](crate::adjust::tone::adjust) followed by
/// [`composite`](crate::adjust::filter::composite), fused into one pass so
/// only the output buffer is allocated.
pub fn render(source: &ImageBuffer, params: &EditParams) -> Result<ImageBuffer, EditError> {
    params.validate()?;

    let start = Instant::now();
    let output = parallel::map_pixels(source, |px| render_pixel(px, params))?;

    tracing::debug!(
        "render {}x{}: brightness={} contrast={} filters={} in {:.2}ms",
        source.width(),
        source.height(),
        params.tone.brightness,
        params.tone.contrast,
        params.filters.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(output)
}
