use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Fatal per-request failure, in practice the storage backend erroring out.
/// Not-found and empty-title never reach this type; they degrade to an
/// unchanged list.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct AppError(#[from] anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
