//! The store screenshot pipeline: decode, composite, encode.

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use image_compose::Layout;

use crate::config::CanvasSize;
use crate::error::ComposeError;
use crate::output;

/// Composite `source` onto a blurred fill of itself at `canvas` size.
pub fn compose(source: &DynamicImage, canvas: CanvasSize) -> (DynamicImage, Layout) {
    let (w, h) = canvas.dimensions();
    image_compose::backdrop_composite(source, w, h)
}

/// Decode the image at `path`, guessing the format from its content first.
pub fn load(path: &Path) -> Result<DynamicImage, ComposeError> {
    let read_err = |source| ComposeError::Read {
        path: path.to_path_buf(),
        source,
    };
    let decode_err = |source| ComposeError::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .map_err(read_err)?
        .with_guessed_format()
        .map_err(read_err)?
        .decode()
        .map_err(decode_err)
}

/// Build the store screenshot for `input` and write it next to the input.
///
/// Returns the path of the written PNG.
pub fn produce(input: &Path, canvas: CanvasSize) -> Result<PathBuf, ComposeError> {
    if !input.exists() {
        return Err(ComposeError::InputNotFound(input.to_path_buf()));
    }
    let output_path = output::output_path_for(input, canvas)?;

    let source = load(input)?;
    tracing::info!(
        input = %input.display(),
        width = source.width(),
        height = source.height(),
        color = ?source.color(),
        "Loaded source image"
    );

    let (composite, layout) = compose(&source, canvas);
    drop(source);
    tracing::info!(
        %canvas,
        fg_w = layout.foreground.0,
        fg_h = layout.foreground.1,
        scaled = layout.foreground_scaled(),
        "Composited foreground onto blurred backdrop"
    );

    output::write_png(composite, &output_path)?;
    tracing::info!(output = %output_path.display(), "Wrote store screenshot");

    Ok(output_path)
}
