/// Blog HTTP Service Library
///
/// REST/JSON front end over the shared post store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route table
/// - `error`: Error types and their HTTP status mapping
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;

pub use config::Config;
pub use error::{AppError, Result};
