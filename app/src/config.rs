//! Run configuration: the supported canvas sizes and fixed output naming.

use std::fmt;
use std::str::FromStr;

/// Infix between the input stem and the canvas size in output file names.
pub const OUTPUT_SUFFIX: &str = "_appstore_";

/// Extension of every output file.
pub const OUTPUT_EXTENSION: &str = "png";

/// A store screenshot resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CanvasSize {
    Size1280x800,
    #[default]
    Size1440x900,
    Size2560x1600,
    Size2880x1800,
}

impl CanvasSize {
    /// Every supported size, smallest first.
    pub const ALL: [CanvasSize; 4] = [
        CanvasSize::Size1280x800,
        CanvasSize::Size1440x900,
        CanvasSize::Size2560x1600,
        CanvasSize::Size2880x1800,
    ];

    /// `(width, height)` in pixels.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            CanvasSize::Size1280x800 => (1280, 800),
            CanvasSize::Size1440x900 => (1440, 900),
            CanvasSize::Size2560x1600 => (2560, 1600),
            CanvasSize::Size2880x1800 => (2880, 1800),
        }
    }

    pub const fn width(self) -> u32 {
        self.dimensions().0
    }

    pub const fn height(self) -> u32 {
        self.dimensions().1
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{w}x{h}")
    }
}

impl FromStr for CanvasSize {
    type Err = UnknownCanvasSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanvasSize::ALL
            .into_iter()
            .find(|size| size.to_string() == s)
            .ok_or_else(|| UnknownCanvasSize(s.to_string()))
    }
}

/// A size token that names none of [`CanvasSize::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid size: {token} (available: {sizes})", token = .0, sizes = available_sizes())]
pub struct UnknownCanvasSize(pub String);

/// Comma-separated list of the size tokens, e.g. for error and help text.
pub fn available_sizes() -> String {
    CanvasSize::ALL
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
