//! Content pipeline handlers
//!
//! Cron-gated trigger for the blog content generator. The gates (weekday,
//! hour window, minimum interval) live in `scheduler`; this module only
//! wires them to config, the run log and the outbound HTTP call.

use std::sync::atomic::Ordering;

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use serde::Serialize;

use crate::models::{ContentRun, RunStatus};
use crate::scheduler::{self, GateDecision, RunGuard, ScheduleGates};
use crate::{AppError, AppResult, AppState};

fn gates_from_config(state: &AppState) -> ScheduleGates {
    ScheduleGates {
        allowed_days: state.config.content_days.clone(),
        window_start_hour: state.config.content_window_start_hour,
        window_end_hour: state.config.content_window_end_hour,
        min_interval_hours: state.config.content_min_interval_hours,
    }
}

// ============================================================================
// TRIGGER
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ContentRunResponse {
    pub executed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<GateDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<ContentRun>,
}

/// Trigger a content run if every gate passes.
///
/// Gate misses are a 200 with `executed: false` so the calling cron job does
/// not alert on ordinary off-schedule invocations; an in-flight run is a
/// 409.
pub async fn run(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<ContentRunResponse>> {
    if let Some(expected) = &state.config.scheduler_token {
        let provided = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if provided != Some(expected.as_str()) {
            return Err(AppError::Unauthorized);
        }
    }

    let last_completed = ContentRun::last_completed(&state.pool)
        .await?
        .map(|run| run.finished_at);

    let decision = scheduler::evaluate(&gates_from_config(&state), Utc::now(), last_completed);
    if !decision.is_allowed() {
        tracing::info!("Content run skipped: {:?}", decision);
        return Ok(Json(ContentRunResponse {
            executed: false,
            skipped: Some(decision),
            run: None,
        }));
    }

    // Plain in-process flag, reset when the guard drops
    let Some(_guard) = RunGuard::acquire(&state.content_executing) else {
        return Err(AppError::Conflict(
            "A content run is already executing".to_string(),
        ));
    };

    let started_at = Utc::now();
    tracing::info!(
        "Invoking content generator at {}",
        state.config.content_generator_url
    );

    let (status, detail) = match state
        .http
        .post(&state.config.content_generator_url)
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => (
            RunStatus::Completed,
            format!("generator responded {}", response.status()),
        ),
        Ok(response) => (
            RunStatus::Failed,
            format!("generator responded {}", response.status()),
        ),
        Err(e) => (RunStatus::Failed, format!("generator unreachable: {}", e)),
    };

    let run = ContentRun::create(&state.pool, status, Some(&detail), started_at).await?;

    Ok(Json(ContentRunResponse {
        executed: true,
        skipped: None,
        run: Some(run),
    }))
}

// ============================================================================
// STATUS
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GateConfig {
    pub allowed_days: Vec<String>,
    pub window_start_hour: u32,
    pub window_end_hour: u32,
    pub min_interval_hours: i64,
}

#[derive(Debug, Serialize)]
pub struct ContentStatusResponse {
    pub executing: bool,
    pub gates: GateConfig,
    pub last_run: Option<ContentRun>,
}

pub async fn status(State(state): State<AppState>) -> AppResult<Json<ContentStatusResponse>> {
    let last_run = ContentRun::last_run(&state.pool).await?;

    Ok(Json(ContentStatusResponse {
        executing: state.content_executing.load(Ordering::SeqCst),
        gates: GateConfig {
            allowed_days: state
                .config
                .content_days
                .iter()
                .map(|d| d.to_string())
                .collect(),
            window_start_hour: state.config.content_window_start_hour,
            window_end_hour: state.config.content_window_end_hour,
            min_interval_hours: state.config.content_min_interval_hours,
        },
        last_run,
    }))
}
