//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use wattboard_domain::error::{ValidationError, WattboardError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`WattboardError`] and rejected requests to an HTTP response with
/// appropriate status code. Every error answers with an [`ErrorBody`].
#[derive(Debug)]
pub enum ApiError {
    Domain(WattboardError),
    /// The request could not be extracted (bad path segment, malformed body).
    Rejected { status: StatusCode, message: String },
}

impl From<WattboardError> for ApiError {
    fn from(err: WattboardError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(WattboardError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(WattboardError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(WattboardError::Backend(err)) => {
                tracing::error!(error = %err, "backend error");
                (StatusCode::BAD_GATEWAY, "backend unavailable".to_string())
            }
            Self::Rejected { status, message } => (status, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
