/// Store configuration
///
/// Loaded from environment variables. Defaults point at a local MongoDB with the
/// `gblog` database and `post` collection.
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Which `PostRepository` implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

#[derive(Clone)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// MongoDB connection string
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Maximum connections held by the driver pool
    pub max_pool_size: u32,
    /// Connection and server selection timeout
    pub connect_timeout_ms: u64,
    /// Deadline applied to every repository call
    pub operation_timeout_ms: u64,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("backend", &self.backend)
            .field("uri", &"[REDACTED]")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("max_pool_size", &self.max_pool_size)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .field("operation_timeout_ms", &self.operation_timeout_ms)
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Mongo,
            uri: "mongodb://localhost:27017".to_string(),
            database: "gblog".to_string(),
            collection: "post".to_string(),
            max_pool_size: 20,
            connect_timeout_ms: 5_000,
            operation_timeout_ms: 5_000,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            backend: parse_or_default(&lookup, "POST_STORE_BACKEND", defaults.backend)?,
            uri: lookup("MONGODB_URI").unwrap_or(defaults.uri),
            database: lookup("MONGODB_DATABASE").unwrap_or(defaults.database),
            collection: lookup("MONGODB_COLLECTION").unwrap_or(defaults.collection),
            max_pool_size: parse_or_default(&lookup, "MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            connect_timeout_ms: parse_or_default(
                &lookup,
                "MONGODB_CONNECT_TIMEOUT_MS",
                defaults.connect_timeout_ms,
            )?,
            operation_timeout_ms: parse_or_default(
                &lookup,
                "MONGODB_OPERATION_TIMEOUT_MS",
                defaults.operation_timeout_ms,
            )?,
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }

    /// Log configuration without the connection string
    pub fn log_config(&self) {
        tracing::info!(
            backend = ?self.backend,
            database = %self.database,
            collection = %self.collection,
            max_pool_size = self.max_pool_size,
            operation_timeout_ms = self.operation_timeout_ms,
            "Post store configuration"
        );
    }
}

fn parse_or_default<T, F>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => val
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        None => Ok(default),
    }
}
