use std::path::PathBuf;

use crate::config::UnknownCanvasSize;

/// Everything that can stop a compositing run.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error(transparent)]
    UnknownCanvasSize(#[from] UnknownCanvasSize),

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Input path has no file name: {}", .0.display())]
    InvalidInputPath(PathBuf),

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write {}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl ComposeError {
    /// Whether the error comes from how the tool was invoked rather than from
    /// image data or disk I/O.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ComposeError::UnknownCanvasSize(_)
                | ComposeError::InputNotFound(_)
                | ComposeError::InvalidInputPath(_)
        )
    }
}
