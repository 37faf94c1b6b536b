//! Decode and encode helpers.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::error::{VisionError, VisionResult};

/// Decode an uploaded image from its raw bytes, sniffing the format.
pub fn decode(raw: &[u8]) -> VisionResult<DynamicImage> {
    image::load_from_memory(raw).map_err(VisionError::Decode)
}

/// Encode an image as JPEG into a fresh buffer.
///
/// JPEG is the one output format this service produces, so the declared
/// `image/jpeg` content type always matches the bytes.
pub fn encode_jpeg(image: &RgbImage) -> VisionResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageFormat::Jpeg)
        .map_err(VisionError::Encode)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn round_trips_through_jpeg() {
        let img = RgbImage::from_pixel(32, 16, Rgb([200, 10, 10]));
        let bytes = encode_jpeg(&img).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(matches!(
            decode(b"not an image"),
            Err(VisionError::Decode(_))
        ));
    }
}
