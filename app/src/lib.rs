//! Store screenshot compositor.
//!
//! Centers a screenshot on a blurred, cover-cropped fill of itself at one of
//! the App Store canvas sizes and writes the result as PNG next to the input.

pub mod cli;
pub mod compositor;
pub mod config;
pub mod error;
pub mod output;

#[cfg(test)]
mod test_support;

pub use cli::Cli;
pub use compositor::{compose, load, produce};
pub use config::{CanvasSize, UnknownCanvasSize, available_sizes};
pub use error::ComposeError;
pub use output::output_path_for;
