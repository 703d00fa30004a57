//! gRPC surface of the blog service
//!
//! - `blog`: types generated from `blog_service.proto`
//! - `server`: `BlogService` implementation and server bootstrap

pub mod server;

// Import generated proto code
pub mod blog {
    pub mod v1 {
        tonic::include_proto!("blog.v1");
    }
    pub use v1::*;
}

pub use server::{start_grpc_server, BlogServiceImpl};
