//! Face-location boundary.
//!
//! Detection itself is delegated to an external engine; this trait is the
//! seam the rest of the pipeline talks to, so tests and alternative
//! backends can plug in without touching the handlers.

use image::RgbImage;

use faceframe_models::{DetectionModel, FaceRegion};

use crate::error::VisionResult;

/// Pluggable face-location backend.
///
/// Implementations take a decoded pixel buffer and return the bounding
/// region of every face found, in whatever order the engine produces.
/// An empty result is a valid non-error outcome.
pub trait FaceLocator: Send + Sync {
    /// Locate faces in `image` using the given detection model.
    fn locate(&self, image: &RgbImage, model: DetectionModel) -> VisionResult<Vec<FaceRegion>>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}
