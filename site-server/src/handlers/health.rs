//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    service: &'static str,
    status: &'static str,
    version: &'static str,
    environment: String,
    timestamp: i64,
}

impl HealthResponse {
    fn current(environment: &str) -> Self {
        Self {
            service: "safescan-site",
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            environment: environment.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::current(&state.config.environment))
}
