//! Upload validation.

use axum::body::Bytes;
use thiserror::Error;

/// One uploaded file: claimed filename plus raw bytes. Lives only for the
/// duration of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Ways an upload can be rejected before any image work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file field in the request")]
    MissingFile,

    #[error("Uploaded file has an empty filename")]
    EmptyFilename,

    #[error("File extension is not allowed")]
    DisallowedExtension,
}

/// Validate an upload candidate against the allowed extension set.
pub fn validate<'a>(
    file: Option<&'a UploadedFile>,
    allowed_extensions: &[String],
) -> Result<&'a UploadedFile, UploadError> {
    let file = file.ok_or(UploadError::MissingFile)?;
    if file.filename.is_empty() {
        return Err(UploadError::EmptyFilename);
    }
    if !extension_allowed(&file.filename, allowed_extensions) {
        return Err(UploadError::DisallowedExtension);
    }
    Ok(file)
}

/// A filename is allowed when it has a dot and its lowercased final suffix
/// is in the allowed set.
fn extension_allowed(filename: &str, allowed_extensions: &[String]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, suffix)) => {
            let suffix = suffix.to_lowercase();
            allowed_extensions.iter().any(|ext| *ext == suffix)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        ["png", "jpg", "jpeg", "gif"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn upload(filename: &str) -> UploadedFile {
        UploadedFile {
            filename: filename.to_string(),
            bytes: Bytes::new(),
        }
    }

    #[test]
    fn accepts_allowed_extensions_in_any_case() {
        for name in ["a.png", "a.jpg", "a.jpeg", "a.gif", "A.PNG", "photo.JpEg"] {
            let file = upload(name);
            assert!(validate(Some(&file), &allowed()).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_disallowed_extensions() {
        for name in ["photo.txt", "a.exe", "archive.tar.gz", "a.png.exe"] {
            let file = upload(name);
            assert_eq!(
                validate(Some(&file), &allowed()),
                Err(UploadError::DisallowedExtension),
                "{name}"
            );
        }
    }

    #[test]
    fn rejects_dotless_filenames() {
        let file = upload("png");
        assert_eq!(
            validate(Some(&file), &allowed()),
            Err(UploadError::DisallowedExtension)
        );
    }

    #[test]
    fn rejects_empty_filename() {
        let file = upload("");
        assert_eq!(
            validate(Some(&file), &allowed()),
            Err(UploadError::EmptyFilename)
        );
    }

    #[test]
    fn rejects_missing_file() {
        assert_eq!(validate(None, &allowed()), Err(UploadError::MissingFile));
    }

    #[test]
    fn bare_suffix_with_leading_dot_is_allowed() {
        // Matches the original suffix rule: ".png" splits to suffix "png".
        let file = upload(".png");
        assert!(validate(Some(&file), &allowed()).is_ok());
    }
}
