/// Configuration management for the blog HTTP service
///
/// Everything comes from environment variables (optionally seeded from `.env`).
use post_store::StoreConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Worker threads; actix picks one per core when unset
    pub workers: Option<usize>,
    /// Largest accepted `POST /add/` body in bytes
    pub max_payload_bytes: usize,
}

impl AppConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let workers = match std::env::var("HTTP_WORKERS") {
            Ok(val) => Some(
                val.parse()
                    .map_err(|e| format!("Failed to parse HTTP_WORKERS='{}': {}", val, e))?,
            ),
            Err(_) => None,
        };

        let max_payload_bytes = match std::env::var("HTTP_MAX_PAYLOAD_BYTES") {
            Ok(val) => val.parse().map_err(|e| {
                format!("Failed to parse HTTP_MAX_PAYLOAD_BYTES='{}': {}", val, e)
            })?,
            Err(_) => crate::handlers::DEFAULT_MAX_PAYLOAD_BYTES,
        };

        Ok(Config {
            app: AppConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: match std::env::var("HTTP_PORT") {
                    Ok(val) => val
                        .parse()
                        .map_err(|e| format!("Failed to parse HTTP_PORT='{}': {}", val, e))?,
                    Err(_) => 8080,
                },
                workers,
                max_payload_bytes,
            },
            store: StoreConfig::from_env()?,
        })
    }
}
