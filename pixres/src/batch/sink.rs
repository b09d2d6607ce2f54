//! Output sinks for batch results

use super::error::BatchResult;
use log::debug;
use pixres_core::Image;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for the images a batch produces
pub trait ImageSink {
    /// Persist `image` under `path`.
    fn save(&mut self, image: &Image, path: &Path) -> BatchResult<()>;
}

/// Writes images to disk, picking the encoder from the file extension.
///
/// Missing parent directories are created.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl ImageSink for FileSink {
    fn save(&mut self, image: &Image, path: &Path) -> BatchResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            debug!("creating output directory {}", parent.display());
            fs::create_dir_all(parent).map_err(pixres_io::IoError::from)?;
        }
        pixres_io::write_image_auto(image, path)?;
        Ok(())
    }
}

/// Keeps results in memory, in the order they were saved.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub images: Vec<(PathBuf, Image)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the image saved under `path`.
    pub fn get(&self, path: &Path) -> Option<&Image> {
        self.images
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, img)| img)
    }
}

impl ImageSink for MemorySink {
    fn save(&mut self, image: &Image, path: &Path) -> BatchResult<()> {
        self.images.push((path.to_path_buf(), image.clone()));
        Ok(())
    }
}
