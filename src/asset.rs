// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Asset store: writes generated textures and refreshes whatever imports them.

use crate::error::AtlasError;
use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// `<folder>/<file_name>.png`
pub fn output_path<P: AsRef<Path>>(folder: P, file_name: &str) -> PathBuf {
    folder.as_ref().join(format!("{}.png", file_name))
}

pub trait AssetStore {
    /// Encode image as PNG and store it at path
    fn write_png(&mut self, path: &Path, image: &RgbaImage) -> Result<(), AtlasError>;

    /// Called once after a successful write
    fn refresh(&mut self) {}

    /// Whether path can be used as an output folder
    fn is_valid_folder(&self, path: &Path) -> bool;
}

/// Writes assets to the local file system
#[derive(Debug, Default)]
pub struct FileAssetStore {
    written: Vec<PathBuf>,
}

impl FileAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths written since the last refresh
    pub fn pending(&self) -> &[PathBuf] {
        &self.written
    }
}

impl AssetStore for FileAssetStore {
    fn write_png(&mut self, path: &Path, image: &RgbaImage) -> Result<(), AtlasError> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)?;
                info!("Created directory {}", dir.display());
            }
        }
        image.save_with_format(path, ImageFormat::Png)?;
        debug!("Wrote {} ({}x{})", path.display(), image.width(), image.height());
        self.written.push(path.to_path_buf());
        Ok(())
    }

    fn refresh(&mut self) {
        for p in self.written.drain(..) {
            debug!("Refreshed asset {}", p.display());
        }
    }

    /// Existing directories, or paths not created yet
    fn is_valid_folder(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && (path.is_dir() || !path.exists())
    }
}
