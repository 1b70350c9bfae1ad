use std::str::FromStr;

use glam::I64Vec2;
use log::warn;

use super::render_context::RenderContext;
use crate::error::{RenderError, Result};
use crate::math::{pack, Color, Pixel, Point, Size};

/// Mirroring applied to the source coordinates of an image blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

impl Flip {
    /// Decode a numeric flip mode; unknown values fall back to [`Flip::None`]
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Flip::None,
            1 => Flip::Horizontal,
            2 => Flip::Vertical,
            3 => Flip::Both,
            other => {
                warn!("Unrecognized flip mode {}, drawing unflipped", other);
                Flip::None
            }
        }
    }

    pub fn horizontal(self) -> bool {
        matches!(self, Flip::Horizontal | Flip::Both)
    }

    pub fn vertical(self) -> bool {
        matches!(self, Flip::Vertical | Flip::Both)
    }
}

impl FromStr for Flip {
    type Err = std::convert::Infallible;

    /// Never fails: unknown names fall back to [`Flip::None`] with a warning
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "none" | "default" => Flip::None,
            "horizontal" | "h" => Flip::Horizontal,
            "vertical" | "v" => Flip::Vertical,
            "both" | "hv" => Flip::Both,
            other => {
                warn!("Unrecognized flip mode '{}', drawing unflipped", other);
                Flip::None
            }
        })
    }
}

/// Decoded image, pixels packed like the render buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Image {
    /// The image a failed load leaves behind
    pub fn empty() -> Self {
        Self::default()
    }

    /// Repack interleaved RGBA bytes, four per pixel
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(RenderError::Allocation { width, height })?;

        if bytes.len() != expected {
            return Err(RenderError::decode(
                "raw RGBA",
                format!("expected {} bytes for {}x{}, got {}", expected, width, height, bytes.len()),
            ));
        }

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(expected / 4)
            .map_err(|_| RenderError::Allocation { width, height })?;
        pixels.extend(
            bytes
                .chunks_exact(4)
                .map(|px| pack(Color::new(px[0], px[1], px[2], px[3]))),
        );

        Ok(Self {
            pixels,
            width,
            height,
            channels: 4,
        })
    }

    /// Record the channel count of the asset the pixels were expanded from
    pub(crate) fn with_channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Channels in the source asset; pixels are always stored as RGBA
    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Source pixel for destination offset `(x, y)` under `flip`
    fn sample(&self, x: u32, y: u32, flip: Flip) -> Pixel {
        let sx = if flip.horizontal() { self.width - 1 - x } else { x };
        let sy = if flip.vertical() { self.height - 1 - y } else { y };
        self.pixels[sy as usize * self.width as usize + sx as usize]
    }
}

/// Image blitting through the compositor
impl RenderContext {
    /// Blit with its top-left corner at `position`
    pub fn draw_image(&mut self, image: &Image, position: Point, tint: Color) {
        self.draw_image_ex(image, position, Point::ZERO, Flip::None, tint);
    }

    /// Blit anchored at `position - pivot`, mirrored per `flip`.
    ///
    /// `tint` is accepted but currently a pass-through: sampled pixels are
    /// composited unmodified.
    pub fn draw_image_ex(&mut self, image: &Image, position: Point, pivot: Point, flip: Flip, _tint: Color) {
        let Some(target) = self.target_size() else {
            return;
        };

        let origin = position.as_i64vec2() - pivot.as_i64vec2();
        let size = I64Vec2::new(i64::from(image.width), i64::from(image.height));
        // Source offsets whose destination lands inside the buffer
        let (min, max) = ((-origin).max(I64Vec2::ZERO), (target - origin).min(size));

        for y in min.y..max.y {
            for x in min.x..max.x {
                let pixel = image.sample(x as u32, y as u32, flip);
                self.plot(origin.x + x, origin.y + y, pixel);
            }
        }
    }
}
