//! Scan Types
//!
//! Core types for the scan engine. No logic - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity levels shown next to each finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// THREAT CATEGORY
// ============================================================================

/// Marketing-facing threat families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreatCategory {
    Trojan,
    Ransomware,
    Spyware,
    Keylogger,
    Adware,
    Rootkit,
    Worm,
    Botnet,
    Cryptominer,
    Backdoor,
    #[serde(rename = "Browser Hijacker")]
    BrowserHijacker,
    Tracker,
    #[serde(rename = "PUP")]
    Pup,
}

impl ThreatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatCategory::Trojan => "Trojan",
            ThreatCategory::Ransomware => "Ransomware",
            ThreatCategory::Spyware => "Spyware",
            ThreatCategory::Keylogger => "Keylogger",
            ThreatCategory::Adware => "Adware",
            ThreatCategory::Rootkit => "Rootkit",
            ThreatCategory::Worm => "Worm",
            ThreatCategory::Botnet => "Botnet",
            ThreatCategory::Cryptominer => "Cryptominer",
            ThreatCategory::Backdoor => "Backdoor",
            ThreatCategory::BrowserHijacker => "Browser Hijacker",
            ThreatCategory::Tracker => "Tracker",
            ThreatCategory::Pup => "PUP",
        }
    }
}

impl std::fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// GENERATED THREAT
// ============================================================================

/// One fabricated finding, derived from the catalog and the seeded stream.
/// Constructed fresh per scan, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedThreat {
    /// Catalog name template with the `{id}` token filled in
    pub name: String,
    pub category: ThreatCategory,
    pub severity: Severity,
    /// Candidate location joined with a filename from the fixed table
    pub location: String,
}

// ============================================================================
// RECOMMENDED PLAN
// ============================================================================

/// Pricing tier recommended from the derived security score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedPlan {
    S,
    M,
    L,
}

impl RecommendedPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedPlan::S => "s",
            RecommendedPlan::M => "m",
            RecommendedPlan::L => "l",
        }
    }
}

impl std::fmt::Display for RecommendedPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BUNDLE
// ============================================================================

/// Derived risk indicators for one fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBundle {
    /// Overall score in [20, 100] - lower means scarier
    pub security_score: i32,
    /// Number of findings in [8, 35]
    pub threat_count: i32,
    pub privacy_issues: i32,
    pub performance_issues: i32,
    pub vulnerabilities: i32,
    /// Pure step function of `security_score`
    pub recommended_plan: RecommendedPlan,
}

// ============================================================================
// UNIQUENESS ESTIMATE
// ============================================================================

/// Coarse bands for the "1 in N users" display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UniquenessBand {
    Low,
    Medium,
    High,
}

impl UniquenessBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniquenessBand::Low => "low",
            UniquenessBand::Medium => "medium",
            UniquenessBand::High => "high",
        }
    }
}

/// Cosmetic "1 in N users share this fingerprint" figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniquenessEstimate {
    pub ratio: u64,
    pub band: UniquenessBand,
}

// ============================================================================
// SCAN REPORT
// ============================================================================

/// Everything one scan produces for a fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub scores: ScoreBundle,
    pub threats: Vec<GeneratedThreat>,
    pub uniqueness: UniquenessEstimate,
}
