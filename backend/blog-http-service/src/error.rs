/// Error types for the blog HTTP service
///
/// Error responses carry a status code and an empty body.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use post_store::PostStoreError;
use thiserror::Error;

/// Result type for handler operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request payload could not be parsed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store failure, malformed identifier, or any unclassified error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

/// A malformed post id is reported as 500, not 400.
impl From<PostStoreError> for AppError {
    fn from(err: PostStoreError) -> Self {
        match err {
            PostStoreError::NotFound(id) => AppError::NotFound(id),
            PostStoreError::InvalidId(id) => AppError::Internal(format!("invalid post id: {}", id)),
            PostStoreError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
