use actix_web::{web, App, HttpServer};
use anyhow::{anyhow, Context, Result};
use blog_http_service::{handlers, Config};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,blog_http_service=debug,post_store=debug".into());

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

/// Blog HTTP Service
///
/// # Routes
///
/// - `GET /` - list every post
/// - `POST /add/` - create a post from `{"body": "..."}`
/// - `GET /{post_id}/` - fetch one post
/// - `GET /health/live`, `GET /health/ready` - health checks
///
/// actix installs its own SIGINT/SIGTERM handlers and drains workers on shutdown.
#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()
        .map_err(|e| anyhow!(e))
        .context("Failed to load configuration")?;

    info!("Starting blog-http-service v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.env);
    config.store.log_config();

    let repo = post_store::connect(&config.store)
        .await
        .context("Failed to initialize post store")?;

    if let Err(e) = repo.ping().await {
        warn!(error = %e, "Post store not reachable at startup; requests will fail until it is");
    }

    let repo_data = web::Data::new(repo);
    let bind_address = config.app.bind_address();
    let max_payload_bytes = config.app.max_payload_bytes;
    info!(max_payload_bytes, "Starting HTTP server at {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(repo_data.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::routes(max_payload_bytes))
    });
    if let Some(workers) = config.app.workers {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with an error")?;

    info!("blog-http-service shutting down");
    Ok(())
}
