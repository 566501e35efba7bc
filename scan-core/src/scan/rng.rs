//! Seeded Pseudo-Random Source
//!
//! Reproducible draw stream for the scan engine. No cryptographic strength,
//! only determinism: the same fingerprint must map to the same findings
//! across visits, including records persisted by earlier deployments. The
//! hash recurrence and the LCG constants are therefore part of the contract
//! and must not be swapped for anything "better".

// ============================================================================
// SEED DERIVATION
// ============================================================================

/// Rolling 32-bit string hash, then absolute value.
///
/// Per code unit: `h = ((h << 5) - h) + code`, wrapping at int32 width at
/// every step. Runs over UTF-16 code units so multi-byte input hashes the
/// same as in the original client.
pub fn hash_to_seed(input: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in input.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit));
    }
    h.unsigned_abs()
}

// ============================================================================
// LCG CONSTANTS
// ============================================================================

const MULTIPLIER: i64 = 9301;
const INCREMENT: i64 = 49297;
const MODULUS: i64 = 233280;

// ============================================================================
// SEEDED RNG
// ============================================================================

/// Linear congruential generator over the derived seed.
///
/// Each call advances the internal state, so one instance serves exactly one
/// generation pass. The score pass and the threat pass seed their own
/// instances from the same fingerprint; sharing one instance between them
/// would shift every downstream draw.
#[derive(Debug, Clone)]
pub struct SeededRng {
    seed: i64,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self {
            seed: i64::from(seed),
        }
    }

    pub fn from_fingerprint(fingerprint: &str) -> Self {
        Self::new(hash_to_seed(fingerprint))
    }

    /// Next value in [0, 1)
    pub fn next(&mut self) -> f64 {
        self.seed = (self.seed * MULTIPLIER + INCREMENT) % MODULUS;
        self.seed as f64 / MODULUS as f64
    }

    /// Next integer in [min, max], both bounds inclusive.
    ///
    /// Goes through the float path on purpose - `floor(next() * span) + min`
    /// is what existing records were generated with.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        let span = f64::from(max - min + 1);
        (self.next() * span).floor() as i32 + min
    }

    /// Uniform pick from a non-empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_int(0, items.len() as i32 - 1) as usize]
    }
}

// ============================================================================
// TESTS
// ============================================================================
