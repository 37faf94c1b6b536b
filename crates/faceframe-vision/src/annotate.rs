//! Drawing face boxes and labels onto an image.

use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use faceframe_models::FaceRegion;

use crate::error::{VisionError, VisionResult};

/// Label drawn beneath every face box. There is no identity-matching step
/// in this pipeline, so every face is unknown.
pub const LABEL: &str = "Unknown";

const BOX_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const LABEL_SCALE: f32 = 14.0;

static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Draws face boxes and "Unknown" labels.
///
/// Holds the parsed label font; construct once and reuse.
pub struct Annotator {
    font: FontRef<'static>,
}

impl Annotator {
    pub fn new() -> VisionResult<Self> {
        let font = FontRef::try_from_slice(FONT_BYTES)
            .map_err(|e| VisionError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Draw a hollow blue box around each region, with a filled label
    /// plate beneath it and the label text in white.
    pub fn annotate(&self, image: &mut RgbImage, regions: &[FaceRegion]) {
        let scale = PxScale::from(LABEL_SCALE);
        let (_, text_height) = text_size(scale, &self.font, LABEL);
        let text_height = text_height as i64;
        let (width, height) = image.dimensions();

        for region in regions {
            let Some(outline) =
                clamp_rect(region.left, region.top, region.right, region.bottom, width, height)
            else {
                continue;
            };
            draw_hollow_rect_mut(image, outline, BOX_COLOR);

            let plate_top = region.bottom - text_height - 10;
            if let Some(plate) =
                clamp_rect(region.left, plate_top, region.right, region.bottom, width, height)
            {
                draw_filled_rect_mut(image, plate, BOX_COLOR);
            }

            draw_text_mut(
                image,
                TEXT_COLOR,
                (region.left + 6) as i32,
                (region.bottom - text_height - 5) as i32,
                scale,
                &self.font,
                LABEL,
            );
        }
    }
}

/// Clamp edge coordinates to the image and convert to a drawable rect.
/// Returns `None` when the clamped rect would be degenerate.
fn clamp_rect(
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
    img_width: u32,
    img_height: u32,
) -> Option<Rect> {
    if img_width == 0 || img_height == 0 {
        return None;
    }
    let max_x = img_width as i64 - 1;
    let max_y = img_height as i64 - 1;

    let x0 = left.clamp(0, max_x);
    let y0 = top.clamp(0, max_y);
    let x1 = right.clamp(0, max_x);
    let y1 = bottom.clamp(0, max_y);

    let width = (x1 - x0).max(0) as u32;
    let height = (y1 - y0).max(0) as u32;
    if width == 0 || height == 0 {
        return None;
    }

    Some(Rect::at(x0 as i32, y0 as i32).of_size(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn white_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, WHITE)
    }

    #[test]
    fn draws_box_outline_in_blue() {
        let annotator = Annotator::new().unwrap();
        let mut img = white_image(100, 100);
        annotator.annotate(&mut img, &[FaceRegion::new(10, 50, 60, 5)]);

        // Top edge and left edge of the outline.
        assert_eq!(img.get_pixel(30, 10), &BOX_COLOR);
        assert_eq!(img.get_pixel(5, 30), &BOX_COLOR);
        // Well inside the box, above the label plate, stays untouched.
        assert_eq!(img.get_pixel(30, 20), &WHITE);
    }

    #[test]
    fn fills_label_plate_beneath_the_box() {
        let annotator = Annotator::new().unwrap();
        let mut img = white_image(100, 100);
        annotator.annotate(&mut img, &[FaceRegion::new(10, 50, 60, 5)]);

        // Bottom-left of the plate, left of where the text starts.
        assert_eq!(img.get_pixel(6, 59), &BOX_COLOR);
    }

    #[test]
    fn renders_label_text_in_white() {
        let annotator = Annotator::new().unwrap();
        let mut img = white_image(200, 200);
        annotator.annotate(&mut img, &[FaceRegion::new(20, 180, 160, 20)]);

        // Some pixel in the label band must be mostly white from a glyph
        // (anti-aliasing blends toward the blue plate underneath).
        let found = (130..160).any(|y| {
            (26..174).any(|x| {
                let p = img.get_pixel(x, y);
                p.0[0] > 150 && p.0[1] > 150
            })
        });
        assert!(found, "expected label glyph pixels inside the plate");
    }

    #[test]
    fn no_regions_leaves_image_untouched() {
        let annotator = Annotator::new().unwrap();
        let mut img = white_image(50, 50);
        let before = img.clone();
        annotator.annotate(&mut img, &[]);
        assert_eq!(img, before);
    }

    #[test]
    fn out_of_bounds_region_is_clamped() {
        let annotator = Annotator::new().unwrap();
        let mut img = white_image(40, 40);
        annotator.annotate(&mut img, &[FaceRegion::new(-10, 120, 90, -5)]);
        // Clamped outline reaches the visible corner.
        assert_eq!(img.get_pixel(0, 0), &BOX_COLOR);
    }

    #[test]
    fn degenerate_rect_is_skipped() {
        assert!(clamp_rect(10, 10, 10, 30, 100, 100).is_none());
        assert!(clamp_rect(0, 0, 10, 10, 0, 0).is_none());
    }
}
