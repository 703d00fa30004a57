/// MongoDB-backed post repository
use crate::config::StoreConfig;
use crate::error::{PostStoreError, Result};
use crate::models::{NewPostDocument, Post, PostDocument};
use crate::repository::PostRepository;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::future::Future;
use std::time::Duration;

pub struct MongoPostRepository {
    database: Database,
    collection: Collection<PostDocument>,
    operation_timeout: Duration,
}

impl MongoPostRepository {
    /// Wrap an already constructed client. The client owns the connection pool.
    pub fn new(client: &Client, config: &StoreConfig) -> Self {
        let database = client.database(&config.database);
        let collection = database.collection::<PostDocument>(&config.collection);

        Self {
            database,
            collection,
            operation_timeout: config.operation_timeout(),
        }
    }

    /// Build a client from `config` and wrap it.
    ///
    /// The driver connects lazily; unreachable servers surface on the first call.
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("gblog".to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.connect_timeout());

        let client = Client::with_options(options)?;
        Ok(Self::new(&client, config))
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, mongodb::error::Error>>,
    {
        match tokio::time::timeout(self.operation_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = %e, "MongoDB call failed");
                Err(e.into())
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout_ms = self.operation_timeout.as_millis() as u64,
                    "MongoDB call exceeded deadline"
                );
                Err(PostStoreError::Internal(format!(
                    "{} timed out after {:?}",
                    operation, self.operation_timeout
                )))
            }
        }
    }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>> {
        let docs: Vec<PostDocument> = self
            .bounded("list_all", async {
                let cursor = self.collection.find(doc! {}, None).await?;
                cursor.try_collect::<Vec<PostDocument>>().await
            })
            .await?;

        Ok(docs.into_iter().map(Post::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Post> {
        let oid = ObjectId::parse_str(id).map_err(|_| PostStoreError::InvalidId(id.to_string()))?;

        let found = self
            .bounded("get_by_id", self.collection.find_one(doc! { "_id": oid }, None))
            .await?;

        found
            .map(Post::from)
            .ok_or_else(|| PostStoreError::NotFound(id.to_string()))
    }

    async fn insert(&self, body: &str) -> Result<String> {
        let new_post = NewPostDocument {
            body: body.to_string(),
        };
        let collection = self.collection.clone_with_type::<NewPostDocument>();

        let result = self
            .bounded("insert", collection.insert_one(new_post, None))
            .await?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                PostStoreError::Internal(format!(
                    "store returned non-ObjectId identifier: {}",
                    result.inserted_id
                ))
            })
    }

    async fn ping(&self) -> Result<()> {
        self.bounded("ping", self.database.run_command(doc! { "ping": 1 }, None))
            .await
            .map(|_| ())
    }
}
