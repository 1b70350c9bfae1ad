use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use super::pixel_buffer::PixelBuffer;
use crate::traits::Presenter;

/// Headless presenter that writes each frame to a PNG file.
///
/// The file is overwritten on every present, so it always holds the most
/// recent frame.
pub struct PngPresenter {
    path: PathBuf,
    width: u32,
    height: u32,
    presented: u64,
}

impl PngPresenter {
    pub fn new(path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
            presented: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of frames written so far
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Presenter for PngPresenter {
    fn display_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        let (width, height) = frame.dimensions();
        let rgba = image::RgbaImage::from_raw(width, height, frame.to_rgba_bytes())
            .context("Frame size does not match its pixel data")?;

        rgba
            .save_with_format(&self.path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write frame to {:?}", self.path))?;

        self.presented += 1;
        info!("Presented frame {} to {:?}", self.presented, self.path);
        Ok(())
    }
}
