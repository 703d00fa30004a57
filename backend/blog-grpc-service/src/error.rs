/// Error types for the blog gRPC service
use post_store::PostStoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Store error: {0}")]
    Store(#[from] PostStoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Convert ServiceError to tonic::Status for gRPC responses.
///
/// Internal details stay in the logs; callers only see a generic message.
impl From<ServiceError> for tonic::Status {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Store(PostStoreError::NotFound(id)) => {
                tonic::Status::not_found(format!("post {} not found", id))
            }
            ServiceError::Store(PostStoreError::InvalidId(id)) => {
                tonic::Status::invalid_argument(format!("invalid post id: {}", id))
            }
            ServiceError::Store(PostStoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "post store failure");
                tonic::Status::internal("internal error")
            }
            ServiceError::Config(msg) => {
                tracing::error!(error = %msg, "configuration failure");
                tonic::Status::internal("internal error")
            }
            ServiceError::Transport(e) => {
                tracing::error!(error = %e, "transport failure");
                tonic::Status::internal("internal error")
            }
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
