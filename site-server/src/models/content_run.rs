//! Content run model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Outcome of one content pipeline invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Completed,
    Failed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentRun {
    pub id: i64,
    pub status: String,
    pub detail: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ContentRun {
    pub async fn create(
        pool: &PgPool,
        status: RunStatus,
        detail: Option<&str>,
        started_at: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, ContentRun>(
            r#"
            INSERT INTO content_runs (status, detail, started_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(status.as_str())
        .bind(detail)
        .bind(started_at)
        .fetch_one(pool)
        .await
    }

    /// Most recent completed run; this is what the min-interval gate reads.
    pub async fn last_completed(pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ContentRun>(
            r#"
            SELECT * FROM content_runs
            WHERE status = 'completed'
            ORDER BY finished_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(pool)
        .await
    }

    /// Most recent run regardless of outcome, for the status endpoint.
    pub async fn last_run(pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ContentRun>(
            "SELECT * FROM content_runs ORDER BY finished_at DESC LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}
