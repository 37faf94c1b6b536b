//! Requested-operation parsing.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The client-selected branch of behavior, taken from the `runFunction`
/// form field. Unrecognized values parse to an error and the service falls
/// back to the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedOperation {
    /// Return detected face regions as a JSON array.
    DetectFacesInImage,
    /// Return an annotated copy of the image.
    GetImageBound,
}

impl RequestedOperation {
    /// The form-field value naming this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestedOperation::DetectFacesInImage => "detect_faces_in_image",
            RequestedOperation::GetImageBound => "get_image_bound",
        }
    }
}

impl fmt::Display for RequestedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestedOperation {
    type Err = OperationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detect_faces_in_image" => Ok(RequestedOperation::DetectFacesInImage),
            "get_image_bound" => Ok(RequestedOperation::GetImageBound),
            _ => Err(OperationParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown operation: {0}")]
pub struct OperationParseError(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_operations() {
        assert_eq!(
            "detect_faces_in_image".parse::<RequestedOperation>().unwrap(),
            RequestedOperation::DetectFacesInImage
        );
        assert_eq!(
            "get_image_bound".parse::<RequestedOperation>().unwrap(),
            RequestedOperation::GetImageBound
        );
    }

    #[test]
    fn rejects_unknown_operations() {
        assert!("".parse::<RequestedOperation>().is_err());
        assert!("delete_everything".parse::<RequestedOperation>().is_err());
        // Form values are matched literally, not case-folded.
        assert!("Detect_Faces_In_Image".parse::<RequestedOperation>().is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for op in [
            RequestedOperation::DetectFacesInImage,
            RequestedOperation::GetImageBound,
        ] {
            assert_eq!(op.as_str().parse::<RequestedOperation>().unwrap(), op);
        }
    }
}
