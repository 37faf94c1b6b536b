//! Axum HTTP server for the faceframe upload demo.
//!
//! This crate provides:
//! - Upload validation (extension allow-list)
//! - Operation dispatch from the `runFunction` form field
//! - JSON bounding-box and annotated-image responses

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod upload;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
pub use upload::{UploadError, UploadedFile};
