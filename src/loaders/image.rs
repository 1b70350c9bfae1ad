use std::path::Path;

use log::{error, info};

use crate::core::Image;
use crate::error::{RenderError, Result};

/// Decode an image file (PNG, JPEG, BMP) into packed pixels
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();
    let name = path.display().to_string();

    let decoded = image::open(path).map_err(|e| {
        error!("Failed to load image {:?}: {}", path, e);
        RenderError::decode(&name, e)
    })?;

    finish(decoded, &name)
}

/// Decode an in-memory encoded image; `name` only labels log and error output
pub fn load_image_from_memory(bytes: &[u8], name: &str) -> Result<Image> {
    let decoded = image::load_from_memory(bytes).map_err(|e| {
        error!("Failed to decode image '{}': {}", name, e);
        RenderError::decode(name, e)
    })?;

    finish(decoded, name)
}

/// Like [`load_image`], but a failure yields [`Image::empty`]
pub fn load_image_or_empty(path: impl AsRef<Path>) -> Image {
    load_image(path).unwrap_or_default()
}

fn finish(decoded: image::DynamicImage, name: &str) -> Result<Image> {
    let channels = decoded.color().channel_count();
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    let image = Image::from_rgba(width, height, rgba.as_raw())?.with_channels(channels);

    info!(
        "Loaded image '{}': {}x{}, {} channel(s)",
        name, width, height, channels
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(img: image::DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_rgba_png() {
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        let bytes = encode_png(image::DynamicImage::ImageRgba8(img));

        let image = load_image_from_memory(&bytes, "memory").unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(image.channels(), 4);
        assert_eq!(image.pixels()[0], 0xFF0000FF);
        assert_eq!(image.pixels()[1], 0);
    }

    #[test]
    fn test_rgb_png_becomes_opaque() {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 255]));
        let bytes = encode_png(image::DynamicImage::ImageRgb8(img));

        let image = load_image_from_memory(&bytes, "memory").unwrap();
        assert_eq!(image.channels(), 3);
        assert!(image.pixels().iter().all(|&p| p == 0xFFFF0000));
    }

    #[test]
    fn test_corrupt_bytes_fail() {
        let result = load_image_from_memory(b"definitely not a png", "garbage");
        assert!(matches!(result, Err(RenderError::ImageDecode { .. })));
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let image = load_image_or_empty("/nonexistent/turtle.png");
        assert!(image.is_empty());
    }
}
