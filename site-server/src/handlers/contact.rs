//! Contact form handler

use axum::{extract::State, Json};
use validator::Validate;

use crate::models::{ContactMessage, CreateContactMessage};
use crate::{AppError, AppResult, AppState};

const PLAN_CODES: &[&str] = &["s", "m", "l"];

/// Persist a contact form submission
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<CreateContactMessage>,
) -> AppResult<Json<ContactMessage>> {
    req.validate()?;

    if let Some(plan) = &req.plan_interest {
        if !PLAN_CODES.contains(&plan.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Unknown plan code: {}",
                plan
            )));
        }
    }

    let message = ContactMessage::create(&state.pool, &req).await?;

    tracing::info!("Contact message stored from {}", message.email);
    Ok(Json(message))
}
