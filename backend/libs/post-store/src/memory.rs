/// In-process post repository
///
/// Same identifier format and error classification as the MongoDB repository.
/// Backs the front-end test suites and `POST_STORE_BACKEND=memory`.
use crate::error::{PostStoreError, Result};
use crate::models::Post;
use crate::repository::PostRepository;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<ObjectId, String>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.posts.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned<E>(_: E) -> PostStoreError {
    PostStoreError::Internal("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = self.posts.read().map_err(poisoned)?;
        Ok(posts
            .iter()
            .map(|(id, body)| Post {
                id: id.to_hex(),
                body: body.clone(),
            })
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Post> {
        let oid = ObjectId::parse_str(id).map_err(|_| PostStoreError::InvalidId(id.to_string()))?;
        let posts = self.posts.read().map_err(poisoned)?;

        posts
            .get(&oid)
            .map(|body| Post {
                id: oid.to_hex(),
                body: body.clone(),
            })
            .ok_or_else(|| PostStoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, body: &str) -> Result<String> {
        let oid = ObjectId::new();
        self.posts
            .write()
            .map_err(poisoned)?
            .insert(oid, body.to_string());
        Ok(oid.to_hex())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(repo.list_all().await.unwrap(), Vec::new());
        assert!(repo.is_empty().unwrap());
    }

    #[test]
    fn poisoned_lock_is_internal_everywhere() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let holder = repo.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.posts.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(repo.len(), Err(PostStoreError::Internal(_))));
        assert!(matches!(repo.is_empty(), Err(PostStoreError::Internal(_))));
        let listed = block_on(repo.list_all());
        assert!(matches!(listed, Err(PostStoreError::Internal(_))));
    }

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }

    #[tokio::test]
    async fn inserted_bodies_round_trip() {
        let repo = InMemoryPostRepository::new();

        for body in ["hello", "", "multi\nline ✓", "{\"body\":\"nested\"}"] {
            let id = repo.insert(body).await.unwrap();
            assert_eq!(id.len(), 24);

            let post = repo.get_by_id(&id).await.unwrap();
            assert_eq!(post.id, id);
            assert_eq!(post.body, body);
        }
    }

    #[tokio::test]
    async fn malformed_id_is_invalid_not_missing() {
        let repo = InMemoryPostRepository::new();
        repo.insert("present").await.unwrap();

        for id in ["not-a-valid-id", "", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            assert_eq!(
                repo.get_by_id(id).await.unwrap_err(),
                PostStoreError::InvalidId(id.to_string())
            );
        }
    }

    #[tokio::test]
    async fn unassigned_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let id = ObjectId::new().to_hex();

        assert_eq!(
            repo.get_by_id(&id).await.unwrap_err(),
            PostStoreError::NotFound(id)
        );
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let repo = Arc::new(InMemoryPostRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.insert(&format!("post-{i}")).await.unwrap() })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let id = handle.await.unwrap();
            assert!(!id.is_empty());
            ids.insert(id);
        }
        assert_eq!(ids.len(), 32);

        let bodies: HashSet<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.body)
            .collect();
        for i in 0..32 {
            assert!(bodies.contains(&format!("post-{i}")));
        }
    }
}
