//! Gaussian blur for fill backgrounds.

use image::DynamicImage;
use tracing::debug;

/// Blur an image with a Gaussian of the given radius (standard deviation, in pixels).
///
/// Uses three box-blur passes, so the cost does not grow with the radius.
/// A non-positive radius returns the image unchanged.
pub fn gaussian_blur(img: &DynamicImage, radius: f32) -> DynamicImage {
    let (w, h) = (img.width(), img.height());

    if radius <= 0.0 || w == 0 || h == 0 {
        debug!(w, h, radius, "Skipping blur");
        return img.clone();
    }

    debug!(w, h, radius, "Applying Gaussian blur");
    img.fast_blur(radius)
}
