pub mod image;

pub use self::image::{load_image, load_image_from_memory, load_image_or_empty};
