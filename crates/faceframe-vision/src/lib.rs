//! Image pipeline for the faceframe service.
//!
//! This crate owns everything between raw upload bytes and a rendered
//! result:
//! - decoding and JPEG encoding
//! - EXIF orientation correction and scale-to-fit
//! - the [`FaceLocator`] seam to the external detection engine, with a
//!   SeetaFace-backed implementation
//! - annotation (face boxes and labels)

pub mod annotate;
pub mod codec;
pub mod detector;
pub mod error;
pub mod orientation;
pub mod seeta;

pub use annotate::{Annotator, LABEL};
pub use codec::{decode, encode_jpeg};
pub use detector::FaceLocator;
pub use error::{VisionError, VisionResult};
pub use orientation::OrientationRead;
pub use seeta::SeetaFaceLocator;
