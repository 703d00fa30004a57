/// Post handlers - HTTP endpoints for post operations
use crate::error::{AppError, Result};
use actix_web::{http::header, web, HttpResponse};
use post_store::SharedPostRepository;
use serde_json::{Map, Value};

/// Create payload `{"body": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostRequest {
    pub body: String,
}

impl CreatePostRequest {
    /// Lenient decoding: the `body` key matches case-insensitively (exact match wins),
    /// a missing or null `body` and a top-level `null` yield an empty body, and
    /// every other key (including a client-supplied `id`) is ignored.
    pub fn from_json(payload: &[u8]) -> Result<Self> {
        let fields: Option<Map<String, Value>> = serde_json::from_slice(payload)?;
        let fields = fields.unwrap_or_default();

        let raw = fields.get("body").or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("body"))
                .map(|(_, value)| value)
        });

        let body = match raw {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(body)) => body.clone(),
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "body must be a string, got {}",
                    other
                )))
            }
        };

        Ok(Self { body })
    }
}

/// List every post as a JSON array of `{id, body}`
pub async fn list_posts(repo: web::Data<SharedPostRepository>) -> Result<HttpResponse> {
    let posts = repo.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "could not get all posts");
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Create a new post
///
/// Responds 201 with an empty body; the assigned id is in the `Location` header.
pub async fn create_post(
    repo: web::Data<SharedPostRepository>,
    payload: web::Bytes,
) -> Result<HttpResponse> {
    let req = CreatePostRequest::from_json(&payload).map_err(|e| {
        tracing::warn!(error = %e, "could not parse create-post payload");
        e
    })?;

    let id = repo.insert(&req.body).await.map_err(|e| {
        tracing::error!(error = %e, "could not insert post");
        AppError::from(e)
    })?;

    tracing::debug!(post_id = %id, "post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/{}/", id)))
        .finish())
}

/// Get a post by ID
pub async fn get_post(
    repo: web::Data<SharedPostRepository>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();

    let post = repo.get_by_id(&post_id).await.map_err(|e| {
        tracing::warn!(post_id = %post_id, error = %e, "could not get post");
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(post))
}
