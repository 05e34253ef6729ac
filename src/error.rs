use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Shown to the user when the selected title is not in the catalog
pub const NOT_FOUND_MESSAGE: &str = "Movie not found in the dataset. Please select another one.";

/// Shown when the precomputed artifacts cannot be loaded
pub const ARTIFACTS_MISSING_MESSAGE: &str =
    "Model files not found. Please run the data processing notebook first.";

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to load artifacts: {0}")]
    ArtifactLoad(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": NOT_FOUND_MESSAGE, "recommendations": [] }),
            ),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, json!({ "error": msg })),
            AppError::HttpClient(_) => {
                (StatusCode::BAD_GATEWAY, json!({ "error": self.to_string() }))
            }
            AppError::ArtifactLoad(detail) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": ARTIFACTS_MISSING_MESSAGE, "detail": detail }),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = AppError::InvalidInput("n must be positive".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_artifact_load_maps_to_503() {
        let response = AppError::ArtifactLoad("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
