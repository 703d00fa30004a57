/// HTTP handlers for the blog front end
///
/// - Posts: list, create, and fetch by id
/// - Health: liveness and store readiness checks
pub mod health;
pub mod posts;

use actix_web::web;

pub use health::{liveness_check, readiness_check};
pub use posts::{create_post, get_post, list_posts};

/// Create payload cap; matches MongoDB's 16 MiB document limit
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Register every route with the default payload cap.
///
/// The repository must be registered as `web::Data<SharedPostRepository>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    routes(DEFAULT_MAX_PAYLOAD_BYTES)(cfg)
}

/// Route table with an explicit cap on `POST /add/` bodies
pub fn routes(max_payload_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.route("/health/live", web::get().to(liveness_check))
            .route("/health/ready", web::get().to(readiness_check))
            .route("/", web::get().to(list_posts))
            .service(
                web::resource("/add/")
                    .app_data(web::PayloadConfig::new(max_payload_bytes))
                    .route(web::post().to(create_post)),
            )
            .route("/{post_id}/", web::get().to(get_post));
    }
}
