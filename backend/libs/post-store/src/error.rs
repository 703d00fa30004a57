/// Error taxonomy for post storage
///
/// Store failures are classified here and forwarded unchanged; each front end decides
/// the user-visible mapping (HTTP status or gRPC code).
use thiserror::Error;

/// Result type for post-store operations
pub type Result<T> = std::result::Result<T, PostStoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostStoreError {
    /// Well-formed identifier with no matching post
    #[error("Post not found: {0}")]
    NotFound(String),

    /// Identifier cannot be parsed into a store-native ObjectId
    #[error("Invalid post id: {0}")]
    InvalidId(String),

    /// Store communication, decoding, deadline, or any unclassified failure
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl From<mongodb::error::Error> for PostStoreError {
    fn from(err: mongodb::error::Error) -> Self {
        PostStoreError::Internal(err.to_string())
    }
}
