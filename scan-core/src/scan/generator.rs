//! Threat Selection
//!
//! Draws a deterministic set of findings from the fixed catalog. Selection is
//! without replacement until every catalog index has been used once; after
//! that plain draws are allowed so oversized counts still terminate. The
//! wraparound is the documented fallback, not a bug.

use std::collections::HashSet;

use super::catalog::{CATALOG, FILE_NAMES, ID_TOKEN};
use super::rng::SeededRng;
use super::types::GeneratedThreat;

// ============================================================================
// GENERATION
// ============================================================================

/// Generate exactly `count` findings for a fingerprint.
///
/// Pure function of `(fingerprint, count)`: seeds its own rng instance and
/// touches nothing else. Draw order per finding is catalog index (with
/// retries), then id, then directory, then filename - reordering the draws
/// would remap every stored record.
pub fn generate_threats(fingerprint: &str, count: usize) -> Vec<GeneratedThreat> {
    let mut rng = SeededRng::from_fingerprint(fingerprint);
    let mut used: HashSet<usize> = HashSet::with_capacity(count.min(CATALOG.len()));
    let mut threats = Vec::with_capacity(count);

    for _ in 0..count {
        let mut idx = rng.next_int(0, CATALOG.len() as i32 - 1) as usize;
        while used.contains(&idx) && used.len() < CATALOG.len() {
            idx = rng.next_int(0, CATALOG.len() as i32 - 1) as usize;
        }
        used.insert(idx);
        let entry = &CATALOG[idx];

        let id = rng.next_int(0, 89_999) + 10_000;
        let directory = rng.choose(entry.locations);
        let file_name = rng.choose(FILE_NAMES);

        threats.push(GeneratedThreat {
            name: entry.name_template.replace(ID_TOKEN, &id.to_string()),
            category: entry.category,
            severity: entry.severity,
            location: format!("{}{}", directory, file_name),
        });
    }

    threats
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// The 5-digit id sits at the end of every name, so stripping it
    /// recovers the catalog template the finding came from.
    fn template_key(name: &str) -> &str {
        &name[..name.len() - 5]
    }

    #[test]
    fn test_length_contract() {
        assert!(generate_threats("abc123", 0).is_empty());
        assert_eq!(generate_threats("abc123", 1).len(), 1);
        assert_eq!(generate_threats("abc123", 35).len(), 35);
        assert_eq!(generate_threats("abc123", 150).len(), 150);
    }

    #[test]
    fn test_deterministic_per_fingerprint() {
        let a = generate_threats("device-fp-1", 20);
        let b = generate_threats("device-fp-1", 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_golden_findings() {
        // Pinned against the reference draw order; breaks if the catalog,
        // the filename table or any draw moves.
        let threats = generate_threats("abc123", 3);
        assert_eq!(threats[0].name, "Tracker.AudioBeacon.57594");
        assert_eq!(
            threats[0].location,
            "%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\tracker.dat"
        );
        assert_eq!(threats[1].name, "Backdoor.AsyncRAT.54642");
        assert_eq!(threats[1].location, "%LOCALAPPDATA%\\msdefender.db");
        assert_eq!(threats[2].name, "Adware.BrowserAssistant.21320");

        let threats = generate_threats("test-fingerprint-123", 2);
        assert_eq!(threats[0].name, "Ransom.LockBit.Gen33836");
        assert_eq!(threats[1].name, "Rootkit.ZeroAccess.85143");
        assert_eq!(
            threats[1].location,
            "C:\\Windows\\System32\\drivers\\tracker.dat"
        );
    }

    #[test]
    fn test_no_duplicates_until_exhaustion() {
        for fp in ["abc123", "device-fp-1", "device-fp-2", ""] {
            let threats = generate_threats(fp, 35);
            let templates: HashSet<&str> =
                threats.iter().map(|t| template_key(&t.name)).collect();
            assert_eq!(templates.len(), 35, "duplicate finding for {:?}", fp);
        }
    }

    #[test]
    fn test_full_catalog_draw_is_distinct() {
        let threats = generate_threats("exhaustion-check", CATALOG.len());
        let templates: HashSet<&str> = threats.iter().map(|t| template_key(&t.name)).collect();
        assert_eq!(templates.len(), CATALOG.len());
    }

    #[test]
    fn test_oversized_count_covers_catalog_before_repeating() {
        let threats = generate_threats("wraparound-check", 150);
        let first_pass: HashSet<&str> = threats[..CATALOG.len()]
            .iter()
            .map(|t| template_key(&t.name))
            .collect();
        // Every template appears once before any repeat is possible
        assert_eq!(first_pass.len(), CATALOG.len());
    }

    #[test]
    fn test_ids_are_five_digits() {
        for threat in generate_threats("id-check", 35) {
            let id = &threat.name[threat.name.len() - 5..];
            let parsed: u32 = id.parse().expect("id suffix is numeric");
            assert!((10_000..=99_999).contains(&parsed));
        }
    }

    #[test]
    fn test_location_is_directory_plus_filename() {
        for threat in generate_threats("location-check", 35) {
            assert!(
                FILE_NAMES.iter().any(|f| threat.location.ends_with(f)),
                "{} does not end in a known filename",
                threat.location
            );
        }
    }
}
