//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domains::{translate, AuthError, DomainError, ErrorCategory};
use thiserror::Error;

use crate::response::Failure;

pub const INTERNAL_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A use case failed; the translator decides what the client sees.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The bearer token was missing or rejected.
    #[error(transparent)]
    Unauthenticated(#[from] AuthError),
}

/// Invariant → 400, NotFound → 404, Authorization → 403.
pub const fn status_for(category: ErrorCategory) -> StatusCode {
    match category {
        ErrorCategory::Invariant => StatusCode::BAD_REQUEST,
        ErrorCategory::NotFound => StatusCode::NOT_FOUND,
        ErrorCategory::Authorization => StatusCode::FORBIDDEN,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthenticated(err) => {
                let message = err.to_string();
                (StatusCode::UNAUTHORIZED, Json(Failure::fail(&message))).into_response()
            }
            Self::Domain(err) => match translate(&err) {
                Some(client) => (
                    status_for(client.category),
                    Json(Failure::fail(client.message)),
                )
                    .into_response(),
                None => {
                    // Never expose internal details in the response body.
                    tracing::error!(error = %err, "unexpected failure while handling request");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(Failure::error(INTERNAL_FAILURE_MESSAGE)),
                    )
                        .into_response()
                }
            },
        }
    }
}
