//! API configuration.

use std::path::PathBuf;

/// API server configuration.
///
/// Carries everything the pipeline parameterizes over, including the
/// allowed upload extensions; nothing here is ambient or global.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Max request body size
    pub max_body_size: usize,
    /// Longest edge of a normalized image, in pixels
    pub max_dimension: u32,
    /// Allowed upload extensions (lowercase, without the dot)
    pub allowed_extensions: Vec<String>,
    /// Path to the SeetaFace detection model file
    pub model_path: PathBuf,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
            max_body_size: 10 * 1024 * 1024, // 10MB
            max_dimension: 800,
            allowed_extensions: ["png", "jpg", "jpeg", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            model_path: PathBuf::from("models/seeta_fd_frontal_v1.0.bin"),
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("FACEFRAME_HOST").unwrap_or(defaults.host),
            port: std::env::var("FACEFRAME_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            max_body_size: std::env::var("FACEFRAME_MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            max_dimension: std::env::var("FACEFRAME_MAX_DIMENSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_dimension),
            allowed_extensions: std::env::var("FACEFRAME_ALLOWED_EXTENSIONS")
                .map(|s| s.split(',').map(|e| e.trim().to_lowercase()).collect())
                .unwrap_or(defaults.allowed_extensions),
            model_path: std::env::var("FACEFRAME_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_demo_contract() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 5001);
        assert_eq!(config.max_dimension, 800);
        assert_eq!(
            config.allowed_extensions,
            vec!["png", "jpg", "jpeg", "gif"]
        );
        assert!(!config.is_production());
    }
}
