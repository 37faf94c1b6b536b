use serde::{Deserialize, Serialize};

/// Pixel bounds of one detected face, in the coordinate space of the image
/// it was detected in.
///
/// The wire format is the ordered 4-tuple `[top, right, bottom, left]`, the
/// same order the detection library reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i64; 4]", into = "[i64; 4]")]
pub struct FaceRegion {
    /// Y coordinate of the top edge
    pub top: i64,
    /// X coordinate of the right edge
    pub right: i64,
    /// Y coordinate of the bottom edge
    pub bottom: i64,
    /// X coordinate of the left edge
    pub left: i64,
}

impl FaceRegion {
    /// Create a new face region.
    pub fn new(top: i64, right: i64, bottom: i64, left: i64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Width of the region in pixels.
    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    /// Height of the region in pixels.
    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }

    /// Check that the edges are ordered (top above bottom, left of right).
    pub fn is_valid(&self) -> bool {
        self.right > self.left && self.bottom > self.top
    }
}

impl From<[i64; 4]> for FaceRegion {
    fn from([top, right, bottom, left]: [i64; 4]) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl From<FaceRegion> for [i64; 4] {
    fn from(r: FaceRegion) -> Self {
        [r.top, r.right, r.bottom, r.left]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_ordered_tuple() {
        let region = FaceRegion::new(10, 50, 60, 5);
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, "[10,50,60,5]");
    }

    #[test]
    fn deserializes_from_tuple() {
        let region: FaceRegion = serde_json::from_str("[10,50,60,5]").unwrap();
        assert_eq!(region, FaceRegion::new(10, 50, 60, 5));
    }

    #[test]
    fn dimensions() {
        let region = FaceRegion::new(10, 50, 60, 5);
        assert_eq!(region.width(), 45);
        assert_eq!(region.height(), 50);
        assert!(region.is_valid());
    }

    #[test]
    fn inverted_region_is_invalid() {
        assert!(!FaceRegion::new(60, 5, 10, 50).is_valid());
    }

    #[test]
    fn empty_list_serializes_to_empty_array() {
        let regions: Vec<FaceRegion> = Vec::new();
        assert_eq!(serde_json::to_string(&regions).unwrap(), "[]");
    }
}
