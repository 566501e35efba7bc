//! Breach Database Client
//!
//! Thin client for the public breach-database API. Upstream status semantics
//! are part of our own endpoint's contract: 404 means "no breaches", 401/403
//! mean our credentials are bad, 429 is forwarded to the caller.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AppError;

const REQUEST_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_RETRY_AFTER_SECONDS: u64 = 60;

// ============================================================================
// TYPES
// ============================================================================

/// One breach the address appeared in, as the upstream API reports it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BreachRecord {
    pub name: String,
    pub title: String,
    pub domain: String,
    pub breach_date: String,
    pub pwn_count: i64,
    pub data_classes: Vec<String>,
    pub is_verified: bool,
}

#[derive(Debug, Error)]
pub enum BreachError {
    #[error("breach API key not configured")]
    NotConfigured,

    #[error("breach API rejected our credentials")]
    InvalidApiKey,

    #[error("breach API rate limited us, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },

    #[error("breach API returned unexpected status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("breach API response could not be parsed: {message}")]
    ParseError { message: String },

    #[error("network error talking to breach API: {message}")]
    NetworkError { message: String },
}

/// What an upstream status code means before any body is read
#[derive(Debug, PartialEq, Eq)]
enum StatusOutcome {
    Breaches,
    Clean,
    BadCredentials,
    RateLimited,
    Unexpected,
}

fn classify_status(status: u16) -> StatusOutcome {
    match status {
        200 => StatusOutcome::Breaches,
        404 => StatusOutcome::Clean,
        401 | 403 => StatusOutcome::BadCredentials,
        429 => StatusOutcome::RateLimited,
        _ => StatusOutcome::Unexpected,
    }
}

// ============================================================================
// CLIENT
// ============================================================================

#[derive(Debug, Clone)]
pub struct BreachClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl BreachClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Check an email address against the breach database. A clean address
    /// is an empty Vec, not an error.
    pub async fn check_email(&self, email: &str) -> Result<Vec<BreachRecord>, BreachError> {
        let api_key = self.api_key.as_deref().ok_or(BreachError::NotConfigured)?;

        let url = format!(
            "{}/breachedaccount/{}?truncateResponse=false",
            self.base_url, email
        );

        let response = self
            .http
            .get(&url)
            .header("hibp-api-key", api_key)
            .send()
            .await
            .map_err(|e| BreachError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        match classify_status(status) {
            StatusOutcome::Breaches => {
                response
                    .json::<Vec<BreachRecord>>()
                    .await
                    .map_err(|e| BreachError::ParseError {
                        message: e.to_string(),
                    })
            }
            StatusOutcome::Clean => Ok(Vec::new()),
            StatusOutcome::BadCredentials => Err(BreachError::InvalidApiKey),
            StatusOutcome::RateLimited => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS);
                Err(BreachError::RateLimited { retry_after })
            }
            StatusOutcome::Unexpected => Err(BreachError::UnexpectedStatus { status }),
        }
    }
}

impl From<BreachError> for AppError {
    fn from(err: BreachError) -> Self {
        match err {
            BreachError::RateLimited { retry_after } => AppError::RateLimited {
                retry_after_seconds: retry_after,
            },
            other => AppError::ExternalServiceError(other.to_string()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(classify_status(200), StatusOutcome::Breaches);
        assert_eq!(classify_status(404), StatusOutcome::Clean);
        assert_eq!(classify_status(401), StatusOutcome::BadCredentials);
        assert_eq!(classify_status(403), StatusOutcome::BadCredentials);
        assert_eq!(classify_status(429), StatusOutcome::RateLimited);
        assert_eq!(classify_status(500), StatusOutcome::Unexpected);
        assert_eq!(classify_status(302), StatusOutcome::Unexpected);
    }

    #[test]
    fn test_rate_limit_keeps_its_status_code() {
        let app_err: AppError = BreachError::RateLimited { retry_after: 12 }.into();
        assert!(matches!(
            app_err,
            AppError::RateLimited {
                retry_after_seconds: 12
            }
        ));
    }

    #[test]
    fn test_credential_errors_do_not_leak_as_auth_failures() {
        // Upstream 401 is our misconfiguration, not the caller's
        let app_err: AppError = BreachError::InvalidApiKey.into();
        assert!(matches!(app_err, AppError::ExternalServiceError(_)));
    }

    #[test]
    fn test_unconfigured_client_errors_without_network() {
        let client = BreachClient::new("https://breach.example", None);
        assert!(!client.is_configured());
        let err = tokio_test::block_on(client.check_email("user@example.com")).unwrap_err();
        assert!(matches!(err, BreachError::NotConfigured));
    }

    #[test]
    fn test_breach_record_parses_upstream_shape() {
        let json = r#"{
            "Name": "ExampleSite",
            "Title": "Example Site",
            "Domain": "example.com",
            "BreachDate": "2019-07-02",
            "PwnCount": 14936670,
            "DataClasses": ["Email addresses", "Passwords"],
            "IsVerified": true
        }"#;
        let record: BreachRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "ExampleSite");
        assert_eq!(record.pwn_count, 14_936_670);
        assert_eq!(record.data_classes.len(), 2);
        assert!(record.is_verified);
    }
}
