use anyhow::{anyhow, Context, Result};
use blog_grpc_service::grpc::start_grpc_server;
use blog_grpc_service::{Config, ServiceError};
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,blog_grpc_service=debug,post_store=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler; waiting for Ctrl+C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()
        .map_err(|e| anyhow!(e))
        .context("Failed to load configuration")?;

    info!("Starting blog-grpc-service v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.server.env);
    config.store.log_config();

    let grpc_addr = config
        .server
        .grpc_addr()
        .map_err(ServiceError::Config)?;

    let repo = post_store::connect(&config.store)
        .await
        .context("Failed to initialize post store")?;

    if let Err(e) = repo.ping().await {
        warn!(error = %e, "Post store not reachable at startup; requests will fail until it is");
    }

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    start_grpc_server(grpc_addr, repo, shutdown_rx)
        .await
        .context("gRPC server terminated with an error")?;

    info!("blog-grpc-service shutting down");
    Ok(())
}
