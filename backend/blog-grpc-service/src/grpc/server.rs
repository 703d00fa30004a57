// gRPC service implementation for the blog post store
use crate::error::{ServiceError, ServiceResult};
use crate::grpc::blog::blog_service_server::{BlogService, BlogServiceServer};
use crate::grpc::blog::{
    CreatePostRequest, CreatePostResponse, GetPostRequest, GetPostResponse, ListPostsRequest,
    ListPostsResponse, Post as ProtoPost,
};
use post_store::{Post, SharedPostRepository};
use std::net::SocketAddr;
use tokio::sync::broadcast;
use tonic::{Request, Response, Status};

/// BlogService gRPC implementation
pub struct BlogServiceImpl {
    repo: SharedPostRepository,
}

impl BlogServiceImpl {
    pub fn new(repo: SharedPostRepository) -> Self {
        Self { repo }
    }
}

fn convert_post_to_proto(post: Post) -> ProtoPost {
    ProtoPost {
        id: post.id,
        body: post.body,
    }
}

#[tonic::async_trait]
impl BlogService for BlogServiceImpl {
    /// List every post
    async fn list_posts(
        &self,
        _request: Request<ListPostsRequest>,
    ) -> Result<Response<ListPostsResponse>, Status> {
        tracing::debug!("gRPC: Listing posts");

        let posts = self.repo.list_all().await.map_err(ServiceError::from)?;

        Ok(Response::new(ListPostsResponse {
            posts: posts.into_iter().map(convert_post_to_proto).collect(),
        }))
    }

    /// Get a post by ID
    async fn get_post(
        &self,
        request: Request<GetPostRequest>,
    ) -> Result<Response<GetPostResponse>, Status> {
        let req = request.into_inner();

        tracing::debug!("gRPC: Getting post with ID: {}", req.post_id);

        let post = self.repo.get_by_id(&req.post_id).await.map_err(|e| {
            tracing::warn!(post_id = %req.post_id, error = %e, "could not get post");
            ServiceError::from(e)
        })?;

        Ok(Response::new(GetPostResponse {
            post: Some(convert_post_to_proto(post)),
        }))
    }

    /// Create a new post
    async fn create_post(
        &self,
        request: Request<CreatePostRequest>,
    ) -> Result<Response<CreatePostResponse>, Status> {
        let req = request.into_inner();

        let id = self.repo.insert(&req.body).await.map_err(ServiceError::from)?;

        tracing::info!(post_id = %id, "gRPC: Post created");

        Ok(Response::new(CreatePostResponse { id }))
    }
}

/// Serve `BlogService` plus the standard gRPC health service until `shutdown` fires
pub async fn start_grpc_server(
    addr: SocketAddr,
    repo: SharedPostRepository,
    mut shutdown: broadcast::Receiver<()>,
) -> ServiceResult<()> {
    use tonic::transport::Server;
    use tonic_health::server::health_reporter;

    tracing::info!("Starting gRPC server at {}", addr);

    let service = BlogServiceImpl::new(repo);

    let (mut health, health_service) = health_reporter();
    health
        .set_serving::<BlogServiceServer<BlogServiceImpl>>()
        .await;

    Server::builder()
        .trace_fn(|req| tracing::info_span!("grpc", path = %req.uri().path()))
        .add_service(health_service)
        .add_service(BlogServiceServer::new(service))
        .serve_with_shutdown(addr, async move {
            let _ = shutdown.recv().await;
            tracing::info!("gRPC server received shutdown signal");
        })
        .await?;

    Ok(())
}
