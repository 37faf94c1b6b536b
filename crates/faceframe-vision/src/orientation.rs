//! EXIF orientation correction and downscaling.
//!
//! Cameras often store a rotation hint in the EXIF Orientation tag instead
//! of rotating pixels. Before annotating an image we apply that correction
//! so drawn boxes line up with what the user sees.

use std::io::Cursor;

use exif::{In, Tag};
use image::DynamicImage;
use tracing::debug;

use faceframe_models::Orientation;

/// Outcome of reading the EXIF Orientation tag from raw image bytes.
///
/// The original behavior collapsed every failure into a silent skip; the
/// distinct causes are kept apart here so each is testable, and
/// [`OrientationRead::correction`] collapses them back to "no correction".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationRead {
    /// Tag present and readable.
    Found(Orientation),
    /// The container carries no EXIF segment at all.
    NoMetadata,
    /// EXIF is present but has no Orientation tag.
    TagAbsent,
    /// EXIF data exists but could not be parsed, or the tag value is not
    /// an integer.
    Malformed,
}

impl OrientationRead {
    /// The correction to apply; anything but a readable tag means none.
    pub fn correction(&self) -> Orientation {
        match self {
            OrientationRead::Found(orientation) => *orientation,
            _ => Orientation::Normal,
        }
    }
}

/// Read the EXIF Orientation tag from undecoded image bytes.
///
/// Uses the well-known tag identifier directly; the tag set is a fixed
/// external standard, so there is nothing to discover at runtime.
pub fn read_orientation(raw: &[u8]) -> OrientationRead {
    let exif_data = match exif::Reader::new().read_from_container(&mut Cursor::new(raw)) {
        Ok(data) => data,
        Err(exif::Error::NotFound(_)) => return OrientationRead::NoMetadata,
        Err(err) => {
            debug!("Unreadable EXIF data: {}", err);
            return OrientationRead::Malformed;
        }
    };

    let Some(field) = exif_data.get_field(Tag::Orientation, In::PRIMARY) else {
        return OrientationRead::TagAbsent;
    };

    match field.value.get_uint(0) {
        Some(code) => OrientationRead::Found(Orientation::from_exif_code(code)),
        None => OrientationRead::Malformed,
    }
}

/// Apply an orientation correction, expanding the canvas to fit.
///
/// Correction angles are counter-clockwise; `image::rotate90` rotates
/// clockwise, so 270 CCW maps to `rotate90` and 90 CCW to `rotate270`.
pub fn apply(image: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => image,
        Orientation::Rotate180 => image.rotate180(),
        Orientation::Rotate270 => image.rotate90(),
        Orientation::Rotate90 => image.rotate270(),
    }
}

/// Downscale so neither dimension exceeds `max`, preserving aspect ratio.
/// Never upscales.
pub fn fit_within(image: DynamicImage, max: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width <= max && height <= max {
        return image;
    }
    image.thumbnail(max, max)
}

/// Full normalization: orientation correction followed by downscaling.
///
/// `raw` is the undecoded upload (the EXIF segment lives there), `image`
/// its decoded form.
pub fn normalize(raw: &[u8], image: DynamicImage, max_dimension: u32) -> DynamicImage {
    let read = read_orientation(raw);
    match read {
        OrientationRead::Found(orientation) => {
            debug!(?orientation, "Applying orientation correction")
        }
        _ => debug!(?read, "No orientation correction"),
    }
    fit_within(apply(image, read.correction()), max_dimension)
}
