//! Post storage shared by the blog front ends
//!
//! Owns every translation between post operations and the document store:
//! - `models`: the `Post` entity and its persisted document shape
//! - `repository`: the `PostRepository` contract consumed by the HTTP and gRPC services
//! - `mongo` / `memory`: store-backed and in-process implementations
//! - `error`: the `NotFound` / `InvalidId` / `Internal` taxonomy
//! - `config`: store connection settings loaded from the environment

pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;

pub use config::{StoreBackend, StoreConfig};
pub use error::{PostStoreError, Result};
pub use memory::InMemoryPostRepository;
pub use models::Post;
pub use mongo::MongoPostRepository;
pub use repository::{connect, PostRepository, SharedPostRepository};
