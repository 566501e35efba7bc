//! Scan record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use safescan_core::ScanReport;

/// One stored scan per fingerprint. Repeat visits reuse the record instead of
/// regenerating, so a device keeps seeing the same findings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScanRecord {
    pub id: Uuid,
    pub fingerprint: String,
    pub security_score: i32,
    pub threat_count: i32,
    pub privacy_issues: i32,
    pub performance_issues: i32,
    pub vulnerabilities: i32,
    pub recommended_plan: String,
    pub threats: serde_json::Value,
    pub uniqueness_ratio: i64,
    pub uniqueness_band: String,
    pub visit_count: i32,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl ScanRecord {
    pub async fn find_by_fingerprint(
        pool: &PgPool,
        fingerprint: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, ScanRecord>("SELECT * FROM scan_records WHERE fingerprint = $1")
            .bind(fingerprint)
            .fetch_optional(pool)
            .await
    }

    /// Insert a freshly generated report.
    ///
    /// Concurrent first visits race benignly: the generator is pure, so both
    /// writers carry identical payloads and the conflict arm only bumps the
    /// visit counter.
    pub async fn create(
        pool: &PgPool,
        fingerprint: &str,
        report: &ScanReport,
    ) -> Result<Self, sqlx::Error> {
        let threats = serde_json::to_value(&report.threats)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        sqlx::query_as::<_, ScanRecord>(
            r#"
            INSERT INTO scan_records (
                fingerprint, security_score, threat_count, privacy_issues,
                performance_issues, vulnerabilities, recommended_plan,
                threats, uniqueness_ratio, uniqueness_band
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (fingerprint) DO UPDATE SET
                visit_count = scan_records.visit_count + 1,
                last_seen = NOW()
            RETURNING *
            "#,
        )
        .bind(fingerprint)
        .bind(report.scores.security_score)
        .bind(report.scores.threat_count)
        .bind(report.scores.privacy_issues)
        .bind(report.scores.performance_issues)
        .bind(report.scores.vulnerabilities)
        .bind(report.scores.recommended_plan.as_str())
        .bind(threats)
        .bind(report.uniqueness.ratio as i64)
        .bind(report.uniqueness.band.as_str())
        .fetch_one(pool)
        .await
    }

    /// Bump the visit counter on a cache hit.
    pub async fn record_visit(pool: &PgPool, id: Uuid) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, ScanRecord>(
            r#"
            UPDATE scan_records
            SET visit_count = visit_count + 1, last_seen = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
