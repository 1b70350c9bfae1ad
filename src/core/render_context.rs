use glam::I64Vec2;
use log::{error, info, warn};

use super::pixel_buffer::PixelBuffer;
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::math::{mix, pack, unpack, Color, Pixel, Point, Size};

/// Drawing state: the active buffer plus the flags that govern compositing.
///
/// Every drawing call targets the active buffer through [`RenderContext::set_pixel`].
/// Contexts are independent of each other; nothing here is global.
#[derive(Debug, Clone)]
pub struct RenderContext {
    active: Option<PixelBuffer>,
    alpha_blending: bool,
}

impl RenderContext {
    /// Context with no active buffer yet
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            active: None,
            alpha_blending: config.alpha_blending,
        }
    }

    /// Context with a default buffer sized to the display
    pub fn with_display_size(config: &RenderConfig, width: u32, height: u32) -> Result<Self> {
        let mut ctx = Self::new(config);
        ctx.notify_display_size(width, height)?;
        Ok(ctx)
    }

    /// Allocate the default buffer at the display's native size
    pub fn notify_display_size(&mut self, width: u32, height: u32) -> Result<()> {
        info!("Display size: {}x{}", width, height);
        let buffer = PixelBuffer::new(width, height)?;
        self.set_active(buffer)?;
        Ok(())
    }

    /// Make `buffer` the drawing target, handing the previous one back.
    ///
    /// An empty buffer is rejected and the current target stays in place.
    pub fn set_active(&mut self, buffer: PixelBuffer) -> Result<Option<PixelBuffer>> {
        if buffer.is_empty() {
            warn!(
                "Rejected empty buffer ({}x{}) as render target",
                buffer.width(),
                buffer.height()
            );
            return Err(RenderError::InvalidBuffer);
        }

        info!("Active buffer: {}x{}", buffer.width(), buffer.height());
        Ok(self.active.replace(buffer))
    }

    pub fn active(&self) -> Option<&PixelBuffer> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut PixelBuffer> {
        self.active.as_mut()
    }

    /// Detach the active buffer, leaving the context without a target
    pub fn take_active(&mut self) -> Option<PixelBuffer> {
        self.active.take()
    }

    /// Finished frame for the presentation side
    pub fn request_present(&self) -> Result<&PixelBuffer> {
        self.active.as_ref().ok_or_else(|| {
            error!("No active buffer to present");
            RenderError::InvalidBuffer
        })
    }

    pub fn alpha_blending(&self) -> bool {
        self.alpha_blending
    }

    pub fn set_alpha_blending(&mut self, enabled: bool) {
        self.alpha_blending = enabled;
    }

    /// Size of the active buffer, zero without one
    pub fn display_size(&self) -> Size {
        self.active.as_ref().map_or(Size::ZERO, PixelBuffer::size)
    }

    pub fn display_center(&self) -> Point {
        self.display_size() / 2
    }

    /// Composite one pixel into the active buffer.
    ///
    /// Out-of-bounds coordinates clip silently. Fully transparent input never
    /// erases what is already there; with blending on, partial alpha mixes
    /// against the stored pixel.
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) {
        let Some(buffer) = self.active.as_mut() else {
            error!("Pixel data not valid, no active buffer");
            return;
        };

        let Some(idx) = buffer.index(x, y) else {
            return;
        };

        let current = buffer.pixels()[idx];
        let incoming = unpack(pixel);
        if incoming.a == 0 {
            return;
        }

        let out = if self.alpha_blending {
            pack(mix(unpack(current), incoming, incoming.a))
        } else {
            pixel
        };

        if out == current || unpack(out).a == 0 {
            return;
        }

        buffer.pixels_mut()[idx] = out;
    }

    pub fn draw_pixel(&mut self, point: Point, color: Color) {
        self.set_pixel(point.x, point.y, pack(color));
    }

    /// Active buffer size for draw calls that clip their own loops.
    ///
    /// Logs once per call when there is nothing to draw into.
    pub(crate) fn target_size(&self) -> Option<I64Vec2> {
        match self.active.as_ref() {
            Some(buffer) => Some(I64Vec2::new(buffer.width() as i64, buffer.height() as i64)),
            None => {
                error!("Pixel data not valid, no active buffer");
                None
            }
        }
    }

    /// [`RenderContext::set_pixel`] at widened coordinates; anything outside `i32` is off the buffer
    pub(crate) fn plot(&mut self, x: i64, y: i64, pixel: Pixel) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, pixel);
        }
    }

    /// Zero the whole buffer, bypassing the compositor
    pub fn clear_buffer(&mut self) {
        match self.active.as_mut() {
            Some(buffer) => buffer.clear(),
            None => error!("Pixel data not valid, nothing to clear"),
        }
    }

    /// Paint every pixel with `color` through the compositor
    pub fn clear_buffer_color(&mut self, color: Color) {
        let Some(buffer) = self.active.as_ref() else {
            error!("Pixel data not valid, nothing to clear");
            return;
        };

        let (width, height) = (buffer.width() as i32, buffer.height() as i32);
        let pixel = pack(color);
        for y in 0..height {
            for x in 0..width {
                self.set_pixel(x, y, pixel);
            }
        }
    }
}
