//! Breach check handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::breach::BreachRecord;
use crate::{AppResult, AppState};

#[derive(Debug, Deserialize, Validate)]
pub struct BreachCheckRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct BreachCheckResponse {
    pub email: String,
    pub breach_count: usize,
    pub breaches: Vec<BreachRecord>,
}

/// Check an email address against the breach database. A clean address is a
/// 200 with zero breaches; upstream rate limiting keeps its 429.
pub async fn check(
    State(state): State<AppState>,
    Json(req): Json<BreachCheckRequest>,
) -> AppResult<Json<BreachCheckResponse>> {
    req.validate()?;

    let breaches = state.breach.check_email(&req.email).await?;

    Ok(Json(BreachCheckResponse {
        email: req.email,
        breach_count: breaches.len(),
        breaches,
    }))
}
