/// Configuration management for the blog gRPC service
use post_store::StoreConfig;
use std::net::SocketAddr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    pub host: String,
    pub grpc_port: u16,
}

impl ServerConfig {
    pub fn grpc_addr(&self) -> Result<SocketAddr, String> {
        let raw = format!("{}:{}", self.host, self.grpc_port);
        raw.parse()
            .map_err(|e| format!("Invalid gRPC bind address '{}': {}", raw, e))
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            server: ServerConfig {
                env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: std::env::var("GRPC_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                grpc_port: match std::env::var("GRPC_PORT") {
                    Ok(val) => val
                        .parse()
                        .map_err(|e| format!("Failed to parse GRPC_PORT='{}': {}", val, e))?,
                    Err(_) => 50051,
                },
            },
            store: StoreConfig::from_env()?,
        })
    }
}
