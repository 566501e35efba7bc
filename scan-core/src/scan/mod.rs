//! Scan Engine
//!
//! Deterministic "security scan" for the marketing site. One fingerprint maps
//! to exactly one `(scores, threats, uniqueness)` triple for the lifetime of
//! the catalog and the generator arithmetic; both tables and both rng
//! constants are part of that contract.

pub mod catalog;
pub mod generator;
pub mod rng;
pub mod scoring;
pub mod types;
pub mod uniqueness;

pub use generator::generate_threats;
pub use rng::{hash_to_seed, SeededRng};
pub use scoring::{derive_scores, recommend_plan};
pub use types::{
    GeneratedThreat, RecommendedPlan, ScanReport, ScoreBundle, Severity, ThreatCategory,
    UniquenessBand, UniquenessEstimate,
};
pub use uniqueness::estimate_uniqueness;

/// Run a full scan for a fingerprint.
///
/// The expected composition: scores first, then exactly `threat_count`
/// findings. The two passes seed independent rng instances from the same
/// fingerprint, so they correlate only through the count.
pub fn scan(fingerprint: &str) -> ScanReport {
    let scores = derive_scores(fingerprint);
    let threats = generate_threats(fingerprint, scores.threat_count as usize);
    let uniqueness = estimate_uniqueness(fingerprint);

    ScanReport {
        scores,
        threats,
        uniqueness,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_self_consistent() {
        let report = scan("abc123");
        assert_eq!(report.threats.len(), report.scores.threat_count as usize);
        assert_eq!(report.scores, derive_scores("abc123"));
        for threat in &report.threats {
            assert!(matches!(
                threat.severity,
                Severity::Critical | Severity::High | Severity::Medium | Severity::Low
            ));
        }
    }

    #[test]
    fn test_repeat_scans_are_identical() {
        let first = scan("repeat-visit-fp");
        let second = scan("repeat-visit-fp");
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_fingerprints_diverge() {
        // Not guaranteed for every pair, but these two must differ or the
        // seeding is broken.
        let a = scan("device-fp-1");
        let b = scan("device-fp-2");
        assert_ne!(a.threats, b.threats);
    }

    #[test]
    fn test_report_serializes_with_lowercase_enums() {
        let report = scan("abc123");
        let json = serde_json::to_value(&report).unwrap();
        let severity = json["threats"][0]["severity"].as_str().unwrap();
        assert!(["critical", "high", "medium", "low"].contains(&severity));
        let plan = json["scores"]["recommended_plan"].as_str().unwrap();
        assert!(["s", "m", "l"].contains(&plan));
    }
}
