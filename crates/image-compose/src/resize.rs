//! Aspect-ratio-preserving resize operations using Lanczos3 filtering.

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::debug;

use crate::layout::{center_offset, cover_size, fit_size};

/// Scale an image so it covers `width` x `height`, then center-crop the overflow.
///
/// The result is always exactly `width` x `height`, whatever the source aspect ratio.
pub fn cover_crop(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());
    let (cover_w, cover_h) = cover_size((orig_w, orig_h), (width, height));
    let (left, top) = center_offset((cover_w, cover_h), (width, height));

    debug!(
        orig_w,
        orig_h,
        cover_w,
        cover_h,
        left,
        top,
        "Resizing image to cover canvas"
    );

    if (cover_w, cover_h) == (orig_w, orig_h) {
        return img.crop_imm(left, top, width, height);
    }

    img.resize_exact(cover_w, cover_h, FilterType::Lanczos3)
        .crop_imm(left, top, width, height)
}

/// Downscale an image to fit within `max_width` x `max_height`, keeping its aspect ratio.
///
/// Returns the original image unchanged if it already fits.
pub fn fit_within(img: &DynamicImage, max_width: u32, max_height: u32) -> DynamicImage {
    let (orig_w, orig_h) = (img.width(), img.height());

    let Some((new_width, new_height)) = fit_size((orig_w, orig_h), (max_width, max_height)) else {
        debug!(orig_w, orig_h, "Image fits within bounds, skipping resize");
        return img.clone();
    };

    debug!(
        orig_w,
        orig_h,
        new_width,
        new_height,
        "Downscaling image to fit bounds"
    );

    img.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
