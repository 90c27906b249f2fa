//! services/api/src/error.rs
//!
//! Defines the primary error type for the API service and how each kind of
//! failure is reported to HTTP clients.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campaign_core::CampaignError;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The submitted form failed validation. Carries every message found.
    #[error("Invalid form: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// A failure of the campaign generation core.
    #[error("{0}")]
    Campaign(#[from] CampaignError),

    #[error("Invalid filename")]
    InvalidFilename,

    #[error("File not found: {0}")]
    NotFound(String),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// The payload sent whenever a request fails.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub errors: Vec<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidFilename => StatusCode::BAD_REQUEST,
            ApiError::Campaign(CampaignError::InvalidConfiguration(_)) => StatusCode::BAD_REQUEST,
            ApiError::Campaign(CampaignError::RemoteService(_)) => StatusCode::BAD_GATEWAY,
            ApiError::Campaign(CampaignError::ImageGeneration(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Config(_) | ApiError::Io(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let errors = match self {
            ApiError::Validation(errors) => errors,
            other => vec![other.to_string()],
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                errors,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_core::PortError;

    #[test]
    fn campaign_failures_map_to_distinct_statuses() {
        let email = ApiError::from(CampaignError::from(PortError::RemoteService(
            "quota".to_string(),
        )));
        assert_eq!(email.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(email.to_string(), "Error generating email: Remote service error: quota");

        let image = ApiError::from(CampaignError::ImageGeneration("disk full".to_string()));
        assert_eq!(image.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let prompt = ApiError::from(CampaignError::InvalidConfiguration("blank".to_string()));
        assert_eq!(prompt.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_errors_keep_every_message() {
        let response = ApiError::Validation(vec!["a".to_string(), "b".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_files_are_not_found() {
        assert_eq!(
            ApiError::NotFound("x.png".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::InvalidFilename.status(), StatusCode::BAD_REQUEST);
    }
}
