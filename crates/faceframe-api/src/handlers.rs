//! Request handlers: the upload form and the dispatch pipeline.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use tracing::info;

use faceframe_models::{DetectionModel, RequestedOperation};
use faceframe_vision::{codec, orientation, VisionResult};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::upload::{self, UploadedFile};

/// Static upload form, returned for GET requests and for any POST that
/// does not name a recognized operation.
const UPLOAD_FORM: &str = r#"<!doctype html>
<title>Face detection demo</title>
<h1>Upload a picture and detect the faces in it</h1>
<form method="POST" enctype="multipart/form-data">
  <input type="hidden" name="runFunction" value="get_image_bound"/>
  <input type="file" name="file">
  <input type="submit" value="Upload">
</form>
"#;

/// `GET /` — the upload form.
pub async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// `POST /` — validate the upload, read the requested operation and
/// dispatch to the matching pipeline branch.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Response> {
    let mut file: Option<UploadedFile> = None;
    let mut operation: Option<RequestedOperation> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;
                file = Some(UploadedFile { filename, bytes });
            }
            Some("runFunction") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("failed to read field: {e}")))?;
                // First recognized value wins.
                if operation.is_none() {
                    operation = value.parse().ok();
                }
            }
            _ => {}
        }
    }

    let file = upload::validate(file.as_ref(), &state.config.allowed_extensions)?;

    match operation {
        Some(RequestedOperation::DetectFacesInImage) => detect_faces_in_image(&state, file).await,
        Some(RequestedOperation::GetImageBound) => get_image_bound(&state, file).await,
        // No recognized operation: fall through to the upload form.
        None => Ok(Html(UPLOAD_FORM).into_response()),
    }
}

/// JSON branch: decode, detect with the hog model, return the regions as
/// an array of `[top, right, bottom, left]` tuples.
async fn detect_faces_in_image(state: &AppState, file: &UploadedFile) -> ApiResult<Response> {
    let raw = file.bytes.clone();
    let locator = Arc::clone(&state.locator);

    let regions = tokio::task::spawn_blocking(move || {
        let image = codec::decode(&raw)?.to_rgb8();
        locator.locate(&image, DetectionModel::Hog)
    })
    .await
    .map_err(|e| ApiError::internal(format!("detection task failed: {e}")))??;

    info!(count = regions.len(), "Detected faces");
    Ok(Json(regions).into_response())
}

/// Annotated-image branch: orientation-correct, downscale, detect with the
/// engine's default model, draw boxes and labels, return JPEG bytes.
async fn get_image_bound(state: &AppState, file: &UploadedFile) -> ApiResult<Response> {
    let raw = file.bytes.clone();
    let max_dimension = state.config.max_dimension;
    let locator = Arc::clone(&state.locator);
    let annotator = Arc::clone(&state.annotator);

    let jpeg = tokio::task::spawn_blocking(move || -> VisionResult<Vec<u8>> {
        let decoded = codec::decode(&raw)?;
        let normalized = orientation::normalize(&raw, decoded, max_dimension);
        let mut image = normalized.to_rgb8();

        let regions = locator.locate(&image, DetectionModel::default())?;
        info!(count = regions.len(), "Annotating faces");
        annotator.annotate(&mut image, &regions);

        codec::encode_jpeg(&image)
    })
    .await
    .map_err(|e| ApiError::internal(format!("annotation task failed: {e}")))??;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/jpeg")
        .header(header::CONTENT_LENGTH, jpeg.len())
        .body(Body::from(jpeg))
        .map_err(|e| ApiError::internal(format!("failed to build response: {e}")))
}
