//! Database module - PostgreSQL connection and migrations

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Create database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    // Create tables if not exist
    sqlx::query(SCHEMA_SQL)
        .execute(pool)
        .await?;

    tracing::info!("Database schema applied successfully");
    Ok(())
}

/// Database schema SQL
const SCHEMA_SQL: &str = r#"
-- Scan records (one per fingerprint; repeat visits reuse the stored result)
CREATE TABLE IF NOT EXISTS scan_records (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    fingerprint VARCHAR(64) NOT NULL UNIQUE,
    security_score INT NOT NULL,
    threat_count INT NOT NULL,
    privacy_issues INT NOT NULL,
    performance_issues INT NOT NULL,
    vulnerabilities INT NOT NULL,
    recommended_plan VARCHAR(1) NOT NULL,
    threats JSONB NOT NULL,
    uniqueness_ratio BIGINT NOT NULL,
    uniqueness_band VARCHAR(10) NOT NULL,
    visit_count INT NOT NULL DEFAULT 1,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    last_seen TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Contact form submissions
CREATE TABLE IF NOT EXISTS contact_messages (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(200) NOT NULL,
    email VARCHAR(255) NOT NULL,
    message TEXT NOT NULL,
    plan_interest VARCHAR(1),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Content pipeline runs (the min-interval gate reads the last completed one)
CREATE TABLE IF NOT EXISTS content_runs (
    id BIGSERIAL PRIMARY KEY,
    status VARCHAR(20) NOT NULL,
    detail TEXT,
    started_at TIMESTAMPTZ NOT NULL,
    finished_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_scan_records_fingerprint ON scan_records(fingerprint);
CREATE INDEX IF NOT EXISTS idx_scan_records_last_seen ON scan_records(last_seen);
CREATE INDEX IF NOT EXISTS idx_contact_messages_created ON contact_messages(created_at);
CREATE INDEX IF NOT EXISTS idx_content_runs_status ON content_runs(status, finished_at);
"#;
