use log::{error, info};

use crate::error::{RenderError, Result};
use crate::math::{pack, Pixel, Point, Size, BLACK};

/// Row-major grid of packed pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(RenderError::Allocation { width, height })?;

        let mut pixels = Vec::new();
        if pixels.try_reserve_exact(count).is_err() {
            error!("Pixel buffer allocation failed: {}x{} ({} pixels)", width, height, count);
            return Err(RenderError::Allocation { width, height });
        }
        pixels.resize(count, 0);

        info!(
            "Allocated pixel buffer {}x{} ({} bytes)",
            width,
            height,
            count * std::mem::size_of::<Pixel>()
        );

        Ok(Self { pixels, width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    pub fn center(&self) -> Point {
        self.size() / 2
    }

    /// A buffer without pixels cannot be drawn into
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Storage index of `(x, y)`, or `None` outside the buffer
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Stored pixel, or opaque black outside the buffer
    pub fn read(&self, x: i32, y: i32) -> Pixel {
        match self.index(x, y) {
            Some(idx) => self.pixels[idx],
            None => pack(BLACK),
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Raw bytes in memory order, four per pixel
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Bytes in R, G, B, A order regardless of target endianness
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    /// Reset every pixel to zero (transparent black)
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Overwrite every pixel, bypassing blending
    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }
}
