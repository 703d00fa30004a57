// Tests for the BlogService gRPC API
//
// Service methods are called directly against the in-memory store or a mocked
// repository; one test drives a real server over loopback TCP.

use async_trait::async_trait;
use blog_grpc_service::grpc::blog::blog_service_client::BlogServiceClient;
use blog_grpc_service::grpc::blog::blog_service_server::BlogService;
use blog_grpc_service::grpc::blog::{CreatePostRequest, GetPostRequest, ListPostsRequest};
use blog_grpc_service::grpc::{start_grpc_server, BlogServiceImpl};
use mockall::mock;
use post_store::{InMemoryPostRepository, Post, PostRepository, PostStoreError, SharedPostRepository};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tonic::{Code, Request};

mock! {
    pub Repo {}

    #[async_trait]
    impl PostRepository for Repo {
        async fn list_all(&self) -> post_store::Result<Vec<Post>>;
        async fn get_by_id(&self, id: &str) -> post_store::Result<Post>;
        async fn insert(&self, body: &str) -> post_store::Result<String>;
        async fn ping(&self) -> post_store::Result<()>;
    }
}

fn memory_service() -> BlogServiceImpl {
    let repo: SharedPostRepository = Arc::new(InMemoryPostRepository::new());
    BlogServiceImpl::new(repo)
}

#[tokio::test]
async fn create_then_get_round_trips_body() {
    let service = memory_service();

    for body in ["hello", ""] {
        let id = service
            .create_post(Request::new(CreatePostRequest { body: body.into() }))
            .await
            .expect("create")
            .into_inner()
            .id;
        assert_eq!(id.len(), 24);

        let post = service
            .get_post(Request::new(GetPostRequest { post_id: id.clone() }))
            .await
            .expect("get")
            .into_inner()
            .post
            .expect("post present");
        assert_eq!(post.id, id);
        assert_eq!(post.body, body);
    }
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let service = memory_service();

    let resp = service
        .list_posts(Request::new(ListPostsRequest {}))
        .await
        .expect("list")
        .into_inner();
    assert!(resp.posts.is_empty());
}

#[tokio::test]
async fn list_contains_every_created_post() {
    let service = memory_service();

    let mut ids = HashSet::new();
    for i in 0..5 {
        let id = service
            .create_post(Request::new(CreatePostRequest {
                body: format!("post-{i}"),
            }))
            .await
            .expect("create")
            .into_inner()
            .id;
        ids.insert(id);
    }
    assert_eq!(ids.len(), 5);

    let listed: HashSet<String> = service
        .list_posts(Request::new(ListPostsRequest {}))
        .await
        .expect("list")
        .into_inner()
        .posts
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn malformed_id_is_invalid_argument() {
    let service = memory_service();

    let status = service
        .get_post(Request::new(GetPostRequest {
            post_id: "not-a-valid-id".into(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let service = memory_service();

    let status = service
        .get_post(Request::new(GetPostRequest {
            post_id: "65f1c0a2b3d4e5f6a7b8c9d0".into(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn store_failures_are_internal() {
    let mut repo = MockRepo::new();
    repo.expect_list_all()
        .returning(|| Err(PostStoreError::Internal("socket closed".into())));
    repo.expect_insert()
        .returning(|_| Err(PostStoreError::Internal("socket closed".into())));
    repo.expect_get_by_id()
        .returning(|_| Err(PostStoreError::Internal("socket closed".into())));
    let service = BlogServiceImpl::new(Arc::new(repo));

    let status = service
        .list_posts(Request::new(ListPostsRequest {}))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);

    let status = service
        .create_post(Request::new(CreatePostRequest { body: "x".into() }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);

    let status = service
        .get_post(Request::new(GetPostRequest {
            post_id: "65f1c0a2b3d4e5f6a7b8c9d0".into(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert!(!status.message().contains("socket closed"));
}

#[tokio::test]
async fn server_serves_posts_over_tcp() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        listener.local_addr().expect("local addr")
    };

    let repo: SharedPostRepository = Arc::new(InMemoryPostRepository::new());
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let server = tokio::spawn(start_grpc_server(addr, repo, shutdown_rx));

    let endpoint = format!("http://{}", addr);
    let mut client = None;
    for _ in 0..50 {
        match BlogServiceClient::connect(endpoint.clone()).await {
            Ok(c) => {
                client = Some(c);
                break;
            }
            Err(_) => tokio::time::sleep(Duration::from_millis(20)).await,
        }
    }
    let mut client = client.expect("gRPC server did not come up");

    let id = client
        .create_post(CreatePostRequest {
            body: "over the wire".into(),
        })
        .await
        .expect("create")
        .into_inner()
        .id;

    let post = client
        .get_post(GetPostRequest { post_id: id.clone() })
        .await
        .expect("get")
        .into_inner()
        .post
        .expect("post present");
    assert_eq!(post.body, "over the wire");

    let status = client
        .get_post(GetPostRequest {
            post_id: "nope".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    shutdown_tx.send(()).expect("signal shutdown");
    server
        .await
        .expect("server task")
        .expect("server exits cleanly");
}
