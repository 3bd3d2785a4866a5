//! Image stages for store screenshots: cover-then-crop backgrounds,
//! Gaussian blur, fit-within downscaling, and centered pasting.
//!
//! Everything here works on in-memory [`image::DynamicImage`]s; decoding
//! and encoding are left to the caller.

pub mod blur;
pub mod compose;
pub mod layout;
pub mod resize;

// Re-exports for convenience
pub use blur::gaussian_blur;
pub use compose::{backdrop_composite, paste};
pub use layout::Layout;
pub use resize::{cover_crop, fit_within};

/// Blur radius applied to the fill background, in pixels.
pub const BACKGROUND_BLUR_RADIUS: f32 = 40.0;

/// Share of the canvas, in percent, the foreground may occupy per dimension.
pub const FOREGROUND_BOUND_PERCENT: u32 = 90;
