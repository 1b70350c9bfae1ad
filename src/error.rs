use thiserror::Error;

/// Failures surfaced by the rasterizer core.
///
/// Out-of-bounds writes, zero-size shapes and degenerate lines are not
/// errors; they clip silently.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Pixel storage for a buffer or image could not be reserved
    #[error("cannot allocate {width}x{height} pixels")]
    Allocation { width: u32, height: u32 },

    /// A buffer with no pixels was offered as the drawing target
    #[error("buffer has no pixels and cannot become the active target")]
    InvalidBuffer,

    /// An image asset could not be read or decoded
    #[error("failed to decode image '{source_name}': {reason}")]
    ImageDecode { source_name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    pub(crate) fn decode(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::ImageDecode {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
