//! Image composition: opaque pasting and the blurred-backdrop composite.

use image::DynamicImage;
use image::imageops;
use tracing::debug;

use crate::layout::Layout;
use crate::{BACKGROUND_BLUR_RADIUS, blur, resize};

/// Paste `top` onto `base` with its top-left corner at (`x`, `y`).
///
/// Pixels are copied as is, alpha channel included; nothing is blended.
/// Parts of `top` that fall outside `base` are clipped.
pub fn paste(base: &mut DynamicImage, top: &DynamicImage, x: u32, y: u32) {
    use DynamicImage::*;

    let (x, y) = (i64::from(x), i64::from(y));
    match (base, top) {
        (ImageLuma8(b), ImageLuma8(t)) => imageops::replace(b, t, x, y),
        (ImageLumaA8(b), ImageLumaA8(t)) => imageops::replace(b, t, x, y),
        (ImageRgb8(b), ImageRgb8(t)) => imageops::replace(b, t, x, y),
        (ImageRgba8(b), ImageRgba8(t)) => imageops::replace(b, t, x, y),
        (ImageLuma16(b), ImageLuma16(t)) => imageops::replace(b, t, x, y),
        (ImageLumaA16(b), ImageLumaA16(t)) => imageops::replace(b, t, x, y),
        (ImageRgb16(b), ImageRgb16(t)) => imageops::replace(b, t, x, y),
        (ImageRgba16(b), ImageRgba16(t)) => imageops::replace(b, t, x, y),
        (ImageRgb32F(b), ImageRgb32F(t)) => imageops::replace(b, t, x, y),
        (ImageRgba32F(b), ImageRgba32F(t)) => imageops::replace(b, t, x, y),
        // Mismatched layouts go through 8-bit RGBA
        (b, t) => imageops::replace(b, t, x, y),
    }
}

/// Composite `source` over a blurred, cover-cropped copy of itself.
///
/// The output is exactly `canvas_width` x `canvas_height`. The foreground is
/// `source` itself, or a downscaled copy when it exceeds 90% of the canvas in
/// either dimension, centered on the canvas.
pub fn backdrop_composite(
    source: &DynamicImage,
    canvas_width: u32,
    canvas_height: u32,
) -> (DynamicImage, Layout) {
    let layout = Layout::plan(
        (source.width(), source.height()),
        (canvas_width, canvas_height),
    );
    debug!(?layout, "Planned backdrop composite");

    let background = resize::cover_crop(source, canvas_width, canvas_height);
    let mut canvas = blur::gaussian_blur(&background, BACKGROUND_BLUR_RADIUS);
    drop(background);

    let (bound_w, bound_h) = layout.bounds;
    let foreground = resize::fit_within(source, bound_w, bound_h);

    let (paste_x, paste_y) = layout.paste_offset;
    paste(&mut canvas, &foreground, paste_x, paste_y);

    debug!(
        fg_w = foreground.width(),
        fg_h = foreground.height(),
        paste_x,
        paste_y,
        "Pasted foreground onto backdrop"
    );

    (canvas, layout)
}
