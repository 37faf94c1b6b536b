//! Detection model selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named configuration of the face-location engine, trading speed for
/// accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectionModel {
    /// Fast, lower-accuracy detector. The engine's default.
    #[default]
    Hog,
    /// Denser, slower scan for higher accuracy.
    Cnn,
}

impl DetectionModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionModel::Hog => "hog",
            DetectionModel::Cnn => "cnn",
        }
    }
}

impl fmt::Display for DetectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionModel {
    type Err = DetectionModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hog" => Ok(DetectionModel::Hog),
            "cnn" => Ok(DetectionModel::Cnn),
            _ => Err(DetectionModelParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown detection model: {0}")]
pub struct DetectionModelParseError(String);
