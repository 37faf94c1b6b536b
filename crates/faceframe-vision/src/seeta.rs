//! Face locator backed by the `rustface` crate (SeetaFace engine).

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{debug, info};

use faceframe_models::{DetectionModel, FaceRegion};

use crate::detector::FaceLocator;
use crate::error::{VisionError, VisionResult};

/// Scan parameters for one detection model.
///
/// The hog profile keeps the engine's fast defaults; the cnn profile walks
/// a denser pyramid with a smaller window step, trading speed for recall.
#[derive(Debug, Clone, Copy)]
struct ScanParams {
    min_face_size: u32,
    score_thresh: f64,
    pyramid_scale_factor: f32,
    slide_window_step: (u32, u32),
}

impl ScanParams {
    fn for_model(model: DetectionModel) -> Self {
        match model {
            DetectionModel::Hog => Self {
                min_face_size: 20,
                score_thresh: 2.0,
                pyramid_scale_factor: 0.8,
                slide_window_step: (4, 4),
            },
            DetectionModel::Cnn => Self {
                min_face_size: 20,
                score_thresh: 2.0,
                pyramid_scale_factor: 0.9,
                slide_window_step: (2, 2),
            },
        }
    }
}

/// Face locator using the bundled SeetaFace frontal-face model.
///
/// The model file is loaded once at construction; each call builds a fresh
/// detector from it, so `locate` needs no interior mutability.
pub struct SeetaFaceLocator {
    model: rustface::Model,
    model_path: PathBuf,
}

impl std::fmt::Debug for SeetaFaceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeetaFaceLocator")
            .field("model_path", &self.model_path)
            .finish_non_exhaustive()
    }
}

impl SeetaFaceLocator {
    /// Load the SeetaFace model from `path`.
    ///
    /// Returns [`VisionError::ModelNotFound`] when the file does not exist.
    pub fn from_file(path: impl AsRef<Path>) -> VisionResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(VisionError::ModelNotFound(path.to_path_buf()));
        }

        let data = std::fs::read(path)?;
        let model = rustface::read_model(Cursor::new(data))
            .map_err(|e| VisionError::detection_failed(format!("failed to load model: {e}")))?;

        info!(model_path = %path.display(), "Face locator initialized");

        Ok(Self {
            model,
            model_path: path.to_path_buf(),
        })
    }

    /// Path the model was loaded from.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl FaceLocator for SeetaFaceLocator {
    fn locate(&self, image: &RgbImage, model: DetectionModel) -> VisionResult<Vec<FaceRegion>> {
        let params = ScanParams::for_model(model);

        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(params.min_face_size);
        detector.set_score_thresh(params.score_thresh);
        detector.set_pyramid_scale_factor(params.pyramid_scale_factor);
        detector.set_slide_window_step(params.slide_window_step.0, params.slide_window_step.1);

        // The engine consumes a row-major grayscale buffer.
        let gray = image::imageops::grayscale(image);
        let (width, height) = gray.dimensions();
        let faces = detector.detect(&rustface::ImageData::new(gray.as_raw(), width, height));

        debug!(model = %model, count = faces.len(), "Face detection complete");

        Ok(faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                region_from_bbox(
                    bbox.x() as i64,
                    bbox.y() as i64,
                    bbox.width() as i64,
                    bbox.height() as i64,
                )
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "seetaface"
    }
}

/// Convert an engine bounding box (x, y, w, h) to edge coordinates.
fn region_from_bbox(x: i64, y: i64, width: i64, height: i64) -> FaceRegion {
    FaceRegion::new(y, x + width, y + height, x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_is_an_error() {
        let err = SeetaFaceLocator::from_file("/nonexistent/model.bin").unwrap_err();
        assert!(matches!(err, VisionError::ModelNotFound(_)));
    }

    #[test]
    fn bbox_converts_to_edges() {
        let region = region_from_bbox(5, 10, 45, 50);
        assert_eq!(region, FaceRegion::new(10, 50, 60, 5));
        assert!(region.is_valid());
    }

    #[test]
    fn cnn_profile_scans_denser() {
        let hog = ScanParams::for_model(DetectionModel::Hog);
        let cnn = ScanParams::for_model(DetectionModel::Cnn);
        assert!(cnn.slide_window_step.0 < hog.slide_window_step.0);
        assert!(cnn.pyramid_scale_factor > hog.pyramid_scale_factor);
    }
}
