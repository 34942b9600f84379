//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use affiche_domain::error::AfficheError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`AfficheError`] to an HTTP response with appropriate status code.
pub struct ApiError(AfficheError);

impl From<AfficheError> for ApiError {
    fn from(err: AfficheError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AfficheError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AfficheError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AfficheError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
