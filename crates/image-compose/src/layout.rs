//! Pure geometry of a backdrop composite.
//!
//! All sizes are `(width, height)` pairs in pixels. Fractional results are
//! truncated toward zero, matching integer pixel grids.

use crate::FOREGROUND_BOUND_PERCENT;

/// Where every stage of a composite lands, computed before any pixel work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Source image size.
    pub source: (u32, u32),
    /// Output canvas size.
    pub canvas: (u32, u32),
    /// Source size after the cover resize, before cropping.
    pub cover: (u32, u32),
    /// Top-left corner of the crop window inside the cover-resized image.
    pub crop_offset: (u32, u32),
    /// Largest size the foreground may take.
    pub bounds: (u32, u32),
    /// Final foreground size.
    pub foreground: (u32, u32),
    /// Top-left corner of the foreground on the canvas.
    pub paste_offset: (u32, u32),
}

impl Layout {
    /// Plan a composite of a `src` sized image onto a `canvas` sized output.
    ///
    /// Zero source dimensions are treated as one pixel.
    pub fn plan(src: (u32, u32), canvas: (u32, u32)) -> Self {
        let src = (src.0.max(1), src.1.max(1));
        let cover = cover_size(src, canvas);
        let bounds = foreground_bounds(canvas);
        let foreground = fit_size(src, bounds).unwrap_or(src);

        Self {
            source: src,
            canvas,
            cover,
            crop_offset: center_offset(cover, canvas),
            bounds,
            foreground,
            paste_offset: center_offset(canvas, foreground),
        }
    }

    /// Whether the foreground had to be downscaled to fit the bounds.
    pub fn foreground_scaled(&self) -> bool {
        self.foreground != self.source
    }
}

/// Size of `src` scaled uniformly so it covers `canvas` entirely.
///
/// The scale is `max(canvas_w / src_w, canvas_h / src_h)`. The result is
/// never smaller than the canvas in either dimension.
pub fn cover_size(src: (u32, u32), canvas: (u32, u32)) -> (u32, u32) {
    let (sw, sh) = (f64::from(src.0.max(1)), f64::from(src.1.max(1)));
    let scale = (f64::from(canvas.0) / sw).max(f64::from(canvas.1) / sh);
    (
        scale_dim(sw, scale).max(canvas.0),
        scale_dim(sh, scale).max(canvas.1),
    )
}

/// The foreground bounds: 90% of each canvas dimension, truncated.
pub fn foreground_bounds(canvas: (u32, u32)) -> (u32, u32) {
    let pct = |dim: u32| (u64::from(dim) * u64::from(FOREGROUND_BOUND_PERCENT) / 100) as u32;
    (pct(canvas.0), pct(canvas.1))
}

/// Size of `src` scaled down uniformly to fit within `bounds`.
///
/// Returns `None` when `src` already fits, in which case it is used as is.
pub fn fit_size(src: (u32, u32), bounds: (u32, u32)) -> Option<(u32, u32)> {
    if src.0 <= bounds.0 && src.1 <= bounds.1 {
        return None;
    }

    let (sw, sh) = (f64::from(src.0.max(1)), f64::from(src.1.max(1)));
    let scale = (f64::from(bounds.0) / sw).min(f64::from(bounds.1) / sh);
    Some((
        scale_dim(sw, scale).clamp(1, bounds.0.max(1)),
        scale_dim(sh, scale).clamp(1, bounds.1.max(1)),
    ))
}

/// Offset that centers `inner` within `outer`, rounding toward the top-left.
///
/// An `inner` larger than `outer` yields the offset of `outer` inside `inner`.
pub fn center_offset(outer: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
    (outer.0.abs_diff(inner.0) / 2, outer.1.abs_diff(inner.1) / 2)
}

fn scale_dim(dim: f64, scale: f64) -> u32 {
    (dim * scale) as u32
}
