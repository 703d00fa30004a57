use crate::config::{StoreBackend, StoreConfig};
use crate::error::Result;
use crate::memory::InMemoryPostRepository;
use crate::models::Post;
use crate::mongo::MongoPostRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Handle shared by request handlers across workers
pub type SharedPostRepository = Arc<dyn PostRepository>;

/// Data-access contract for posts.
///
/// Each call issues exactly one request to the backing store; nothing is cached
/// between calls. Errors are classified, never recovered locally.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Return every stored post.
    ///
    /// Ordering is unspecified: whatever order the store yields. An empty
    /// collection is an empty vector, not an error.
    async fn list_all(&self) -> Result<Vec<Post>>;

    /// Fetch one post by its hex identifier.
    ///
    /// A malformed id is `InvalidId`; a well-formed id without a record is `NotFound`.
    async fn get_by_id(&self, id: &str) -> Result<Post>;

    /// Store a new post and return the identifier assigned by the store.
    /// Any body is accepted, including the empty string.
    async fn insert(&self, body: &str) -> Result<String>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;
}

/// Build the repository selected by `config.backend`
pub async fn connect(config: &StoreConfig) -> Result<SharedPostRepository> {
    match config.backend {
        StoreBackend::Mongo => {
            let repo = MongoPostRepository::connect(config).await?;
            tracing::info!(
                database = %config.database,
                collection = %config.collection,
                "Connected to MongoDB post store"
            );
            Ok(Arc::new(repo))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory post store; data is lost on restart");
            Ok(Arc::new(InMemoryPostRepository::new()))
        }
    }
}
