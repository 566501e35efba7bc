//! Uniqueness Estimator
//!
//! The "1 in N users share this fingerprint" figure on the results page.
//! Cosmetic marketing arithmetic, not a real entropy estimate - the sum of
//! code units folded into a power of two. Reproduced exactly as displayed.

use super::types::{UniquenessBand, UniquenessEstimate};

/// Estimate how "unique" a fingerprint looks.
///
/// `ratio = 2^((sum of code units mod 18) + 8)`, so the ratio is always a
/// power of two between 256 and 2^25.
pub fn estimate_uniqueness(fingerprint: &str) -> UniquenessEstimate {
    let entropy: u64 = fingerprint.encode_utf16().map(u64::from).sum();
    let ratio = 1u64 << ((entropy % 18) + 8);

    let band = if ratio < 1_000 {
        UniquenessBand::Low
    } else if ratio < 50_000 {
        UniquenessBand::Medium
    } else {
        UniquenessBand::High
    };

    UniquenessEstimate { ratio, band }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_power_of_two_in_range() {
        for i in 0..100 {
            let estimate = estimate_uniqueness(&format!("uniqueness-check-{}", i));
            assert!(estimate.ratio.is_power_of_two());
            assert!((256..=1 << 25).contains(&estimate.ratio));
        }
    }

    #[test]
    fn test_band_boundaries() {
        // Code-unit sums chosen so the ratios straddle both thresholds:
        // 512 and 1024 around 1000, 32768 and 65536 around 50000.
        let low = estimate_uniqueness("B`"); // sum 162, mod 18 = 0
        assert_eq!(low.ratio, 256);
        assert_eq!(low.band, UniquenessBand::Low);

        let below = estimate_uniqueness("C`"); // sum 163, mod 18 = 1
        assert_eq!(below.ratio, 512);
        assert_eq!(below.band, UniquenessBand::Low);

        let above = estimate_uniqueness("Ca"); // sum 164, mod 18 = 2
        assert_eq!(above.ratio, 1024);
        assert_eq!(above.band, UniquenessBand::Medium);

        let medium_top = estimate_uniqueness("a"); // sum 97, mod 18 = 7
        assert_eq!(medium_top.ratio, 32_768);
        assert_eq!(medium_top.band, UniquenessBand::Medium);

        let high = estimate_uniqueness("b"); // sum 98, mod 18 = 8
        assert_eq!(high.ratio, 65_536);
        assert_eq!(high.band, UniquenessBand::High);
    }

    #[test]
    fn test_deterministic() {
        let a = estimate_uniqueness("device-fp-1");
        let b = estimate_uniqueness("device-fp-1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_fingerprint_is_defined() {
        let estimate = estimate_uniqueness("");
        assert_eq!(estimate.ratio, 256);
        assert_eq!(estimate.band, UniquenessBand::Low);
    }
}
