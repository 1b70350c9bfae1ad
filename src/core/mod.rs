pub mod image;
pub mod pixel_buffer;
pub mod png_presenter;
pub mod render_context;
pub mod shapes;

pub use self::image::{Flip, Image};
pub use pixel_buffer::PixelBuffer;
pub use png_presenter::PngPresenter;
pub use render_context::RenderContext;
