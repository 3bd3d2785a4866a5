//! Command-line surface.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::config::CanvasSize;

const AFTER_HELP: &str = "\
Available sizes:
  - 1280x800
  - 1440x900 (default)
  - 2560x1600
  - 2880x1800

Example:
  appstore-shot screenshot.png 1440x900";

/// Create an App Store screenshot: the input centered on a blurred fill of itself.
#[derive(Debug, Parser)]
#[command(name = "appstore-shot", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Source screenshot
    pub input: PathBuf,

    /// Output canvas size
    #[arg(default_value_t = CanvasSize::default(), value_parser = CanvasSize::from_str)]
    pub size: CanvasSize,
}
