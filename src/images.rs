//! Random image selection from a local directory of `.jpg` files.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

/// One image read from disk, plus the alt text derived from its path.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub data: Vec<u8>,
    pub name: String,
}

pub struct ImagePicker {
    dir: PathBuf,
}

impl ImagePicker {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// All `.jpg` files under the directory, recursively, in sorted order.
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        collect_jpgs(&self.dir, &mut found)
            .with_context(|| format!("failed to scan image directory: {}", self.dir.display()))?;
        found.sort();
        Ok(found)
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ImageAsset> {
        let candidates = self.candidates()?;
        let path = candidates
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("no images found in {}", self.dir.display()))?;
        let data = std::fs::read(path)
            .with_context(|| format!("failed to read image: {}", path.display()))?;
        Ok(ImageAsset {
            data,
            name: display_name(path),
        })
    }
}

fn collect_jpgs(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            collect_jpgs(&path, out)?;
        } else if entry.file_name().to_string_lossy().ends_with(".jpg") && path.is_file() {
            // `is_file` follows symlinks; symlinked directories are not descended.
            out.push(path);
        }
    }
    Ok(())
}

/// Path up to its first `.`. Note this also cuts at dots in directory names
/// or in the middle of a file name, not just at the extension.
pub fn display_name(path: &Path) -> String {
    let full = path.to_string_lossy();
    match full.split_once('.') {
        Some((head, _)) => head.to_string(),
        None => full.into_owned(),
    }
}
