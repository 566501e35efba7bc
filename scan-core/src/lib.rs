//! SafeScan Core Engine
//!
//! Deterministic "security scan" engine for the SafeScan site: derives a
//! stable device fingerprint from client-observable signals and fabricates a
//! reproducible set of threat findings and risk scores from it. The same
//! fingerprint always maps to the same findings.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  SAFESCAN CORE                         │
//! ├────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐        ┌────────────────────────┐    │
//! │  │ Fingerprint  │  hex   │  Scan Engine           │    │
//! │  │ (signals →   │──────▶│  (seeded rng, catalog, │    │
//! │  │  SHA-256)    │        │   scores, uniqueness)  │    │
//! │  └──────────────┘        └────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is pure: no clock, no ambient randomness, no I/O. Persistence
//! and HTTP live in the site crate.

pub mod fingerprint;
pub mod scan;

pub use fingerprint::ClientSignals;
pub use scan::{
    derive_scores, estimate_uniqueness, generate_threats, hash_to_seed, scan, GeneratedThreat,
    RecommendedPlan, ScanReport, ScoreBundle, SeededRng, Severity, ThreatCategory,
    UniquenessBand, UniquenessEstimate,
};
