//! Exit codes and messages of the `appstore-shot` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use image::{DynamicImage, GenericImageView, RgbImage};

/// Working directory for one binary run, removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("appstore-shot-cli-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn appstore_shot(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appstore-shot"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_source(dir: &Path, file: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 90])
    });
    let path = dir.join(file);
    DynamicImage::ImageRgb8(img).save(&path).unwrap();
    path
}

#[test]
fn no_arguments_exits_with_usage() {
    let scratch = ScratchDir::new("noargs");
    let dir = &scratch.0;
    let out = appstore_shot(&[], dir);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn unknown_size_exits_and_lists_sizes() {
    let scratch = ScratchDir::new("badsize");
    let dir = &scratch.0;
    write_source(dir, "shot.png", 40, 30);
    let out = appstore_shot(&["shot.png", "999x999"], dir);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    for token in ["1280x800", "1440x900", "2560x1600", "2880x1800"] {
        assert!(stderr.contains(token), "missing {token} in {stderr}");
    }
    assert_eq!(std::fs::read_dir(dir).unwrap().count(), 1);
}

#[test]
fn missing_input_exits_without_writing() {
    let scratch = ScratchDir::new("missing");
    let dir = &scratch.0;
    let out = appstore_shot(&["ghost.png", "1280x800"], dir);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("File not found: ghost.png"));
    assert_eq!(std::fs::read_dir(dir).unwrap().count(), 0);
}

#[test]
fn undecodable_input_exits_with_diagnostic() {
    let scratch = ScratchDir::new("garbage");
    let dir = &scratch.0;
    std::fs::write(dir.join("broken.png"), b"\x89PNG but not really").unwrap();
    let out = appstore_shot(&["broken.png"], dir);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Failed to decode"));
}

#[test]
fn bare_file_name_writes_into_working_directory() {
    let scratch = ScratchDir::new("success");
    let dir = &scratch.0;
    write_source(dir, "screen.png", 300, 200);
    let out = appstore_shot(&["screen.png", "1280x800"], dir);

    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Created: ./screen_appstore_1280x800.png"), "{stdout}");
    assert!(stdout.contains("Output size: 1280x800"), "{stdout}");

    let written = image::open(dir.join("screen_appstore_1280x800.png")).unwrap();
    assert_eq!(written.dimensions(), (1280, 800));
}

#[test]
fn large_source_is_scaled_into_default_canvas() {
    let scratch = ScratchDir::new("large");
    let dir = &scratch.0;
    // 3:2 like a 3000x2000 capture, past the 1296x810 bound
    let input = write_source(dir, "wide.png", 1500, 1000);
    let out = appstore_shot(&[input.to_str().unwrap()], dir);

    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    let written = image::open(dir.join("wide_appstore_1440x900.png")).unwrap();
    assert_eq!(written.dimensions(), (1440, 900));
}

#[test]
fn help_exits_successfully() {
    let scratch = ScratchDir::new("help");
    let dir = &scratch.0;
    let out = appstore_shot(&["--help"], dir);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("1440x900 (default)"));
}
