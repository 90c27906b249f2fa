//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::{
    error::{ApiError, ErrorResponse},
    web::{form::GenerateForm, state::AppState},
};
use axum::{
    body::Body,
    extract::{rejection::FormRejection, Path, State},
    http::header,
    response::{Html, IntoResponse, Json},
    Form,
};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tracing::{info, warn};
use utoipa::{OpenApi, ToSchema};

const INDEX_HTML: &str = include_str!("../../static/index.html");

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        generate_handler,
        download_handler,
    ),
    components(
        schemas(GenerateForm, GenerateResponse, ErrorResponse)
    ),
    tags(
        (name = "Survey Campaign API", description = "Generates HCP survey invitation emails and campaign images.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// The response payload sent after a campaign was generated.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateResponse {
    pub success: bool,
    pub email_content: String,
    /// The PNG file, base64-encoded.
    pub image_base64: String,
    pub image_filename: String,
    pub image_description: String,
    /// `remote` or `fallback`.
    pub image_origin: String,
    pub download_url: String,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Serves the campaign form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Generate the invitation email and campaign image for a survey.
///
/// The form is validated first; when it is invalid no generation is attempted.
/// A failed remote image call does not fail the request: a locally rendered
/// fallback image is returned instead.
#[utoipa::path(
    post,
    path = "/generate",
    request_body(content = GenerateForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Campaign generated", body = GenerateResponse),
        (status = 400, description = "Invalid form fields", body = ErrorResponse),
        (status = 502, description = "The text model failed", body = ErrorResponse),
        (status = 500, description = "No image could be produced", body = ErrorResponse)
    )
)]
pub async fn generate_handler(
    State(app_state): State<Arc<AppState>>,
    form: Result<Form<GenerateForm>, FormRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Form(form) = form.map_err(|rejection| {
        warn!("Rejected form submission: {}", rejection);
        ApiError::Validation(vec![rejection.body_text()])
    })?;
    let request = form.validate().map_err(ApiError::Validation)?;

    info!(
        "Generating campaign for '{}' (specialty: {}, tone: {})",
        request.survey_name, request.medical_specialty, request.tone
    );

    let generator = &app_state.generator;
    let email_content = generator.acquire_email_text(&request.email_brief()).await?;
    let image = generator.acquire_image(&request.image_brief(), None).await?;

    Ok(Json(GenerateResponse {
        success: true,
        email_content,
        download_url: format!("/download/{}", image.filename),
        image_base64: image.base64,
        image_filename: image.filename,
        image_description: image.description,
        image_origin: image.origin.as_str().to_string(),
    }))
}

/// A bare file name: no directories, no parent references, nothing hidden.
fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.starts_with('.')
        && !filename.contains(|c: char| c == '/' || c == '\\')
        && !filename.contains("..")
}

/// Download a previously generated image.
#[utoipa::path(
    get,
    path = "/download/{filename}",
    params(
        ("filename" = String, Path, description = "The image filename returned by /generate.")
    ),
    responses(
        (status = 200, description = "The PNG file, sent as an attachment"),
        (status = 400, description = "Not a plain filename", body = ErrorResponse),
        (status = 404, description = "No such image", body = ErrorResponse)
    )
)]
pub async fn download_handler(
    State(app_state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !is_plain_filename(&filename) {
        warn!("Rejected download of '{}'", filename);
        return Err(ApiError::InvalidFilename);
    }

    let path = app_state.generator.output_dir().join(&filename);
    let file = tokio::fs::File::open(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound(filename.clone())
        } else {
            ApiError::Io(e)
        }
    })?;

    let headers = [
        (header::CONTENT_TYPE, "image/png".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, Body::from_stream(ReaderStream::new(file))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_filenames_only() {
        assert!(is_plain_filename("fallback_Heart_Health_Pulse_20250101_120000.png"));
        assert!(!is_plain_filename(""));
        assert!(!is_plain_filename("../secret.png"));
        assert!(!is_plain_filename("nested/file.png"));
        assert!(!is_plain_filename("nested\\file.png"));
        assert!(!is_plain_filename(".env"));
    }

    #[test]
    fn openapi_lists_both_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/generate"));
        assert!(doc.paths.paths.contains_key("/download/{filename}"));
    }
}
