//! Application state.

use std::sync::Arc;

use faceframe_vision::{Annotator, FaceLocator, SeetaFaceLocator, VisionError};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub locator: Arc<dyn FaceLocator>,
    pub annotator: Arc<Annotator>,
}

impl AppState {
    /// Create application state with the SeetaFace locator from config.
    ///
    /// Fails fast when the detection model file is missing.
    pub fn new(config: ApiConfig) -> Result<Self, VisionError> {
        let locator = Arc::new(SeetaFaceLocator::from_file(&config.model_path)?);
        Self::with_locator(config, locator)
    }

    /// Create application state with an explicit locator backend.
    pub fn with_locator(
        config: ApiConfig,
        locator: Arc<dyn FaceLocator>,
    ) -> Result<Self, VisionError> {
        Ok(Self {
            config,
            locator,
            annotator: Arc::new(Annotator::new()?),
        })
    }
}
