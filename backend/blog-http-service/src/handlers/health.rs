use actix_web::{web, HttpResponse};
use post_store::SharedPostRepository;
use serde::Serialize;
use std::time::Instant;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize, Debug)]
pub struct ComponentCheck {
    pub status: ComponentStatus,
    pub message: String,
    pub latency_ms: u64,
}

#[derive(Serialize, Debug)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub service: &'static str,
    pub version: &'static str,
    pub store: ComponentCheck,
}

pub async fn liveness_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"alive": true}))
}

/// Ready when the post store answers a ping
pub async fn readiness_check(repo: web::Data<SharedPostRepository>) -> HttpResponse {
    let start = Instant::now();
    let result = repo.ping().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let store = match result {
        Ok(()) => ComponentCheck {
            status: ComponentStatus::Healthy,
            message: "post store ping successful".to_string(),
            latency_ms,
        },
        Err(e) => {
            tracing::warn!(error = %e, "post store readiness check failed");
            ComponentCheck {
                status: ComponentStatus::Unhealthy,
                message: format!("post store ping failed: {}", e),
                latency_ms,
            }
        }
    };

    let ready = store.status == ComponentStatus::Healthy;
    let response = ReadinessResponse {
        ready,
        service: "blog-http-service",
        version: env!("CARGO_PKG_VERSION"),
        store,
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
