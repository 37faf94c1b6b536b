//! Shared data models for the faceframe service.
//!
//! This crate provides Serde-serializable types for:
//! - Detected face regions and their wire format
//! - Requested operations from the upload form
//! - Detection model selection
//! - EXIF orientation codes

pub mod detection;
pub mod operation;
pub mod orientation;
pub mod region;

// Re-export common types
pub use detection::DetectionModel;
pub use operation::{OperationParseError, RequestedOperation};
pub use orientation::Orientation;
pub use region::FaceRegion;
