//! Device Fingerprint
//!
//! Reduces client-observable signals to one stable hex digest. The scan
//! engine treats the result as an opaque string; any digest that is stable
//! per device would do, SHA-256 is what the site has always used.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Signals reported by the browser. Every field is defaulted: a device that
/// withholds a signal still gets a defined (if less distinctive)
/// fingerprint, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSignals {
    /// Client network address, filled in server-side from the connection
    pub network_address: String,
    pub user_agent: String,
    /// Minutes offset from UTC as the browser reports it
    pub timezone_offset: i32,
    pub screen_width: u32,
    pub screen_height: u32,
    pub color_depth: u32,
    pub cpu_cores: u32,
    /// Device memory in GB; not every browser exposes it
    pub device_memory_gb: Option<f64>,
    /// Digest of the canvas rendering probe
    pub canvas_digest: String,
    pub webgl_vendor: String,
    pub webgl_renderer: String,
}

impl ClientSignals {
    /// Compute the fingerprint digest for these signals.
    pub fn fingerprint(&self) -> String {
        let memory = match self.device_memory_gb {
            Some(gb) => gb.to_string(),
            None => "unknown".to_string(),
        };

        let combined = format!(
            "{}|{}|{}|{}x{}x{}|{}|{}|{}|{}|{}",
            self.network_address,
            self.user_agent,
            self.timezone_offset,
            self.screen_width,
            self.screen_height,
            self.color_depth,
            self.cpu_cores,
            memory,
            self.canvas_digest,
            self.webgl_vendor,
            self.webgl_renderer
        );

        let mut hasher = Sha256::new();
        hasher.update(combined.as_bytes());
        let digest = hex::encode(hasher.finalize());

        log::debug!(
            "Computed fingerprint: {}...{}",
            &digest[..8],
            &digest[digest.len() - 8..]
        );

        digest
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_signals() -> ClientSignals {
        ClientSignals {
            network_address: "203.0.113.7".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            timezone_offset: -120,
            screen_width: 1920,
            screen_height: 1080,
            color_depth: 24,
            cpu_cores: 8,
            device_memory_gb: Some(16.0),
            canvas_digest: "c4nv4s".to_string(),
            webgl_vendor: "Google Inc.".to_string(),
            webgl_renderer: "ANGLE (NVIDIA GeForce RTX 3060)".to_string(),
        }
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let signals = sample_signals();
        assert_eq!(signals.fingerprint(), signals.fingerprint());
    }

    #[test]
    fn test_fingerprint_is_sha256_hex() {
        let digest = sample_signals().fingerprint();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_any_signal_change_remaps() {
        let base = sample_signals();
        let mut other = sample_signals();
        other.cpu_cores = 4;
        assert_ne!(base.fingerprint(), other.fingerprint());
    }

    #[test]
    fn test_missing_signals_still_fingerprint() {
        let digest = ClientSignals::default().fingerprint();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn test_missing_memory_differs_from_zero() {
        let mut with_zero = sample_signals();
        with_zero.device_memory_gb = Some(0.0);
        let mut without = sample_signals();
        without.device_memory_gb = None;
        assert_ne!(with_zero.fingerprint(), without.fingerprint());
    }
}
