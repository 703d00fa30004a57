/// Blog gRPC Service Library
///
/// gRPC front end over the shared post store.
///
/// # Modules
///
/// - `grpc`: generated `blog.v1` protobuf types and the `BlogService` implementation
/// - `error`: Error types and their gRPC status mapping
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod grpc;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
