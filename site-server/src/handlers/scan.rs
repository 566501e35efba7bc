//! Scan handlers
//!
//! Get-or-create orchestration around the pure engine: an existing record
//! for the fingerprint is served as-is so repeat visits keep their findings;
//! a miss runs the generator and persists the result. The engine's purity is
//! what makes the unguarded create race harmless.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use safescan_core::{estimate_uniqueness, scan, ClientSignals, ScanReport, ScoreBundle};

use crate::models::ScanRecord;
use crate::{AppError, AppResult, AppState};

// ============================================================================
// RESPONSE
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub cached: bool,
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
}

impl ScanResponse {
    fn from_record(record: ScanRecord, cached: bool) -> Self {
        Self {
            cached,
            fingerprint: record.fingerprint,
            security_score: record.security_score,
            threat_count: record.threat_count,
            privacy_issues: record.privacy_issues,
            performance_issues: record.performance_issues,
            vulnerabilities: record.vulnerabilities,
            recommended_plan: record.recommended_plan,
            threats: record.threats,
            uniqueness_ratio: record.uniqueness_ratio,
            uniqueness_band: record.uniqueness_band,
            visit_count: record.visit_count,
        }
    }

    /// Freshly generated report that could not (or will not) be persisted
    fn from_report(fingerprint: &str, report: &ScanReport) -> Self {
        Self {
            cached: false,
            fingerprint: fingerprint.to_string(),
            security_score: report.scores.security_score,
            threat_count: report.scores.threat_count,
            privacy_issues: report.scores.privacy_issues,
            performance_issues: report.scores.performance_issues,
            vulnerabilities: report.scores.vulnerabilities,
            recommended_plan: report.scores.recommended_plan.to_string(),
            threats: serde_json::to_value(&report.threats).unwrap_or_default(),
            uniqueness_ratio: report.uniqueness.ratio as i64,
            uniqueness_band: report.uniqueness.band.as_str().to_string(),
            visit_count: 1,
        }
    }

    /// Fixed placeholder for requests where no fingerprint exists. The
    /// caller always gets a score-shaped value, never an error.
    fn fallback() -> Self {
        let scores = ScoreBundle::fallback();
        let uniqueness = estimate_uniqueness("");
        Self {
            cached: false,
            fingerprint: String::new(),
            security_score: scores.security_score,
            threat_count: scores.threat_count,
            privacy_issues: scores.privacy_issues,
            performance_issues: scores.performance_issues,
            vulnerabilities: scores.vulnerabilities,
            recommended_plan: scores.recommended_plan.to_string(),
            threats: serde_json::Value::Array(Vec::new()),
            uniqueness_ratio: uniqueness.ratio as i64,
            uniqueness_band: uniqueness.band.as_str().to_string(),
            visit_count: 0,
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Run (or replay) the scan for the signals in the request body
pub async fn run(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    body: Option<Json<ClientSignals>>,
) -> AppResult<Json<ScanResponse>> {
    let Some(Json(mut signals)) = body else {
        tracing::warn!("Scan request without readable signals, serving fallback bundle");
        return Ok(Json(ScanResponse::fallback()));
    };

    if signals.network_address.is_empty() {
        signals.network_address = client_address(&headers, addr);
    }

    let fingerprint = signals.fingerprint();

    if let Some(record) = ScanRecord::find_by_fingerprint(&state.pool, &fingerprint).await? {
        // A failed counter bump still serves the stored record
        let record = match ScanRecord::record_visit(&state.pool, record.id).await {
            Ok(updated) => updated,
            Err(e) => {
                tracing::warn!("Failed to bump visit counter: {}", e);
                record
            }
        };
        return Ok(Json(ScanResponse::from_record(record, true)));
    }

    let report = scan(&fingerprint);

    match ScanRecord::create(&state.pool, &fingerprint, &report).await {
        Ok(record) => Ok(Json(ScanResponse::from_record(record, false))),
        Err(e) => {
            // Persistence failure degrades to an uncached response; the next
            // visit regenerates the identical report anyway.
            tracing::error!("Failed to persist scan record: {}", e);
            Ok(Json(ScanResponse::from_report(&fingerprint, &report)))
        }
    }
}

/// Fetch the stored record for a fingerprint
pub async fn get(
    State(state): State<AppState>,
    Path(fingerprint): Path<String>,
) -> AppResult<Json<ScanResponse>> {
    let record = ScanRecord::find_by_fingerprint(&state.pool, &fingerprint)
        .await?
        .ok_or_else(|| AppError::NotFound("No scan recorded for this fingerprint".to_string()))?;

    Ok(Json(ScanResponse::from_record(record, true)))
}

/// First entry of X-Forwarded-For when present, else the peer address
fn client_address(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_score_shaped() {
        let fallback = ScanResponse::fallback();
        assert!((20..=100).contains(&fallback.security_score));
        assert!((8..=35).contains(&fallback.threat_count));
        assert!(["s", "m", "l"].contains(&fallback.recommended_plan.as_str()));
        assert!(fallback.threats.as_array().unwrap().is_empty());
        assert!(!fallback.cached);
    }

    #[test]
    fn test_from_report_matches_engine_output() {
        let report = scan("abc123");
        let response = ScanResponse::from_report("abc123", &report);
        assert_eq!(response.threat_count, report.scores.threat_count);
        assert_eq!(
            response.threats.as_array().unwrap().len(),
            report.threats.len()
        );
        assert!(!response.cached);
    }

    #[test]
    fn test_client_address_prefers_forwarded_header() {
        let peer: SocketAddr = "10.0.0.1:443".parse().unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 10.0.0.2".parse().unwrap());
        assert_eq!(client_address(&headers, peer), "203.0.113.7");

        let empty = HeaderMap::new();
        assert_eq!(client_address(&empty, peer), "10.0.0.1");
    }
}
