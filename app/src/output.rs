//! Output naming and PNG encoding.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat};

use crate::config::{CanvasSize, OUTPUT_EXTENSION, OUTPUT_SUFFIX};
use crate::error::ComposeError;

/// Path of the composite for `input` at `canvas`.
///
/// `shots/main.jpg` at 1440x900 becomes `shots/main_appstore_1440x900.png`.
/// An input without a directory component lands in `.`.
pub fn output_path_for(input: &Path, canvas: CanvasSize) -> Result<PathBuf, ComposeError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| ComposeError::InvalidInputPath(input.to_path_buf()))?;

    let mut name = stem.to_os_string();
    name.push(format!("{OUTPUT_SUFFIX}{canvas}.{OUTPUT_EXTENSION}"));

    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(dir.join(name))
}

/// Encode `img` as PNG at `path`.
///
/// Float pixel layouts are stored as 16-bit RGBA since PNG has no float samples.
pub fn write_png(img: DynamicImage, path: &Path) -> Result<(), ComposeError> {
    let img = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            tracing::debug!("Converting float image to 16-bit RGBA for PNG");
            DynamicImage::ImageRgba16(img.to_rgba16())
        }
        other => other,
    };

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| ComposeError::Write {
            path: path.to_path_buf(),
            source,
        })
}
