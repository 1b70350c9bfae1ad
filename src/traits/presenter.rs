use crate::core::PixelBuffer;

/// Presentation side of the frame handoff - shows finished buffers
pub trait Presenter {
    /// Native display size the default buffer should be allocated at
    fn display_size(&self) -> (u32, u32);

    /// Display a finished frame; the buffer is read-only for the duration
    fn present(&mut self, frame: &PixelBuffer) -> anyhow::Result<()>;
}
