//! Liveness and readiness checks.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::inbound::http::state::HttpState;

/// Process-level readiness flag.
///
/// Starts not ready; `create_server` marks it ready once the socket is bound.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

fn health_response(healthy: bool) -> HttpResponse {
    let mut response = if healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness check: 200 once started and the record store answers a ping.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is starting or the store is unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(health: web::Data<HealthState>, state: web::Data<HttpState>) -> HttpResponse {
    if !health.is_ready() {
        return health_response(false);
    }
    match state.readiness.check_ready().await {
        Ok(()) => health_response(true),
        Err(err) => {
            warn!(error = %err, "readiness check failed");
            health_response(false)
        }
    }
}

/// Liveness check: 200 whenever the process can answer HTTP.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Server is alive"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    health_response(true)
}
