//! EXIF orientation codes.

/// Correction to apply to an image based on its EXIF Orientation tag.
///
/// Rotation amounts are counter-clockwise degrees. Only codes 3, 6 and 8
/// need a correction; every other code (including 1, "normal", and the
/// mirrored variants) is treated as needing none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// No correction needed.
    #[default]
    Normal,
    /// EXIF code 3: rotate 180 degrees.
    Rotate180,
    /// EXIF code 6: rotate 270 degrees counter-clockwise.
    Rotate270,
    /// EXIF code 8: rotate 90 degrees counter-clockwise.
    Rotate90,
}

impl Orientation {
    /// Map a raw EXIF orientation code to its correction.
    pub fn from_exif_code(code: u32) -> Self {
        match code {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate270,
            8 => Orientation::Rotate90,
            _ => Orientation::Normal,
        }
    }

    /// Whether applying this correction swaps width and height.
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(Orientation::from_exif_code(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif_code(6), Orientation::Rotate270);
        assert_eq!(Orientation::from_exif_code(8), Orientation::Rotate90);
    }

    #[test]
    fn other_codes_need_no_correction() {
        for code in [0, 1, 2, 4, 5, 7, 9, 99] {
            assert_eq!(Orientation::from_exif_code(code), Orientation::Normal);
        }
    }

    #[test]
    fn dimension_swap() {
        assert!(Orientation::Rotate90.swaps_dimensions());
        assert!(Orientation::Rotate270.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(!Orientation::Normal.swaps_dimensions());
    }
}
