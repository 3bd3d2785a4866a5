//! Shared helpers for file-level tests.

use std::path::{Path, PathBuf};

use image::DynamicImage;

/// A per-process directory under the temp dir, removed on drop.
pub struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("appstore-shot-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn write_image(&self, file: &str, img: &DynamicImage) -> PathBuf {
        let path = self.0.join(file);
        img.save(&path).unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_removed_on_drop() {
        let dir = ScratchDir::new("drop-guard");
        let kept = dir.path().to_path_buf();
        std::fs::write(kept.join("leftover.txt"), b"x").unwrap();
        assert!(kept.exists());

        drop(dir);
        assert!(!kept.exists());
    }
}
