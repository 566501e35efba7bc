//! Score Derivation
//!
//! Derives the risk indicators shown on the results page. Seeds its own rng
//! instance: the score pass and the threat pass start from the same seed but
//! must never share one mutated stream (see `scan::rng`).

use super::rng::SeededRng;
use super::types::{RecommendedPlan, ScoreBundle};

// ============================================================================
// PLAN STEP FUNCTION
// ============================================================================

/// Pricing tier for a security score. Pure step function, no randomness:
/// below 40 the large plan, below 65 the medium plan, otherwise the small
/// one.
pub fn recommend_plan(security_score: i32) -> RecommendedPlan {
    if security_score < 40 {
        RecommendedPlan::L
    } else if security_score < 65 {
        RecommendedPlan::M
    } else {
        RecommendedPlan::S
    }
}

// ============================================================================
// SCORE DERIVATION
// ============================================================================

/// Derive the score bundle for a fingerprint.
///
/// Draw order is the contract: threat count first, then one draw each for
/// privacy, performance and vulnerabilities. The security score is pure
/// arithmetic on the threat count and consumes no draw.
pub fn derive_scores(fingerprint: &str) -> ScoreBundle {
    let mut rng = SeededRng::from_fingerprint(fingerprint);

    let threat_count = rng.next_int(8, 35);
    let security_score = std::cmp::max(20, (100.0 - f64::from(threat_count) * 2.2).round() as i32);

    let privacy_issues = (f64::from(threat_count) * rng.next() * 2.5 + 10.0).round() as i32;
    let performance_issues = (f64::from(threat_count) * rng.next() * 2.0 + 8.0).round() as i32;
    let vulnerabilities = (f64::from(threat_count) * rng.next() * 1.5 + 2.0).round() as i32;

    ScoreBundle {
        security_score,
        threat_count,
        privacy_issues,
        performance_issues,
        vulnerabilities,
        recommended_plan: recommend_plan(security_score),
    }
}

impl ScoreBundle {
    /// Fixed placeholder served when no fingerprint could be computed.
    /// Internally consistent: the plan matches the step function of the
    /// score.
    pub fn fallback() -> Self {
        let security_score = 62;
        Self {
            security_score,
            threat_count: 12,
            privacy_issues: 18,
            performance_issues: 14,
            vulnerabilities: 6,
            recommended_plan: recommend_plan(security_score),
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
    fn test_deterministic_per_fingerprint() {
        let a = derive_scores("device-fp-1");
        let b = derive_scores("device-fp-1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_golden_bundles() {
        // Pinned against the reference recurrence
        let scores = derive_scores("abc123");
        assert_eq!(scores.threat_count, 34);
        assert_eq!(scores.security_score, 25);
        assert_eq!(scores.privacy_issues, 55);
        assert_eq!(scores.performance_issues, 68);
        assert_eq!(scores.vulnerabilities, 29);
        assert_eq!(scores.recommended_plan, RecommendedPlan::L);

        let scores = derive_scores("test-fingerprint-123");
        assert_eq!(scores.threat_count, 12);
        assert_eq!(scores.security_score, 74);
        assert_eq!(scores.privacy_issues, 18);
        assert_eq!(scores.performance_issues, 22);
        assert_eq!(scores.vulnerabilities, 12);
        assert_eq!(scores.recommended_plan, RecommendedPlan::S);
    }

    #[test]
    fn test_empty_fingerprint_still_scores() {
        // Seed 0 is degenerate but defined; no validation error path exists
        let scores = derive_scores("");
        assert_eq!(scores.threat_count, 13);
        assert_eq!(scores.security_score, 71);
        assert_eq!(scores.recommended_plan, RecommendedPlan::S);
    }

    #[test]
    fn test_range_invariants() {
        for i in 0..500 {
            let scores = derive_scores(&format!("range-check-{}", i));
            assert!((20..=100).contains(&scores.security_score));
            assert!((8..=35).contains(&scores.threat_count));
            assert!(scores.privacy_issues >= 0);
            assert!(scores.performance_issues >= 0);
            assert!(scores.vulnerabilities >= 0);
        }
    }

    #[test]
    fn test_plan_thresholds_exact() {
        assert_eq!(recommend_plan(20), RecommendedPlan::L);
        assert_eq!(recommend_plan(39), RecommendedPlan::L);
        assert_eq!(recommend_plan(40), RecommendedPlan::M);
        assert_eq!(recommend_plan(64), RecommendedPlan::M);
        assert_eq!(recommend_plan(65), RecommendedPlan::S);
        assert_eq!(recommend_plan(100), RecommendedPlan::S);
    }

    #[test]
    fn test_plan_matches_score_in_bundle() {
        for i in 0..200 {
            let scores = derive_scores(&format!("plan-check-{}", i));
            assert_eq!(scores.recommended_plan, recommend_plan(scores.security_score));
        }
    }

    #[test]
    fn test_fallback_is_internally_consistent() {
        let fallback = ScoreBundle::fallback();
        assert_eq!(
            fallback.recommended_plan,
            recommend_plan(fallback.security_score)
        );
        assert!((20..=100).contains(&fallback.security_score));
        assert!((8..=35).contains(&fallback.threat_count));
    }
}
