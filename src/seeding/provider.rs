//! Seed providers: OS entropy and the time-hash fallback.

use super::SeedMaterial;
use chrono::Utc;
use rand_core::{OsRng, RngCore};
use sha2::{Digest, Sha512};
use thiserror::Error;

/// Default number of bytes requested from the OS source.
///
/// Generously sized: the word source conditions the material down to
/// its own intake width, so a large request maximizes mixing quality at
/// no ongoing cost.
pub const OS_REQUEST_BYTES: usize = 1024;

/// A provider could not produce seed material.
#[derive(Debug, Error)]
#[error("seed provider '{provider}' unavailable: {reason}")]
pub struct SeedUnavailable {
    /// Provider that failed.
    pub provider: &'static str,
    /// Underlying failure description.
    pub reason: String,
}

/// A single strategy for producing seed material.
///
/// Providers either return material or a typed unavailable result; they
/// never panic and never abort the chain.
pub trait SeedProvider {
    /// Short stable name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempts to produce seed material.
    fn try_seed(&self) -> Result<SeedMaterial, SeedUnavailable>;
}

/// Primary provider: the operating system's secure random source.
///
/// Access may block (rarely) while the OS gathers entropy; there is no
/// internal timeout, so cancellation is the caller's concern.
#[derive(Debug, Clone)]
pub struct OsEntropy {
    request_bytes: usize,
}

impl OsEntropy {
    /// Creates a provider requesting `request_bytes` per seed.
    pub fn new(request_bytes: usize) -> Self {
        Self { request_bytes }
    }

    /// Returns the configured request size.
    pub fn request_bytes(&self) -> usize {
        self.request_bytes
    }
}

impl Default for OsEntropy {
    fn default() -> Self {
        Self::new(OS_REQUEST_BYTES)
    }
}

impl SeedProvider for OsEntropy {
    fn name(&self) -> &'static str {
        "os-entropy"
    }

    fn try_seed(&self) -> Result<SeedMaterial, SeedUnavailable> {
        let mut buf = vec![0u8; self.request_bytes];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| SeedUnavailable {
                provider: self.name(),
                reason: e.to_string(),
            })?;
        Ok(SeedMaterial::new(buf))
    }
}

/// Last-resort provider: SHA-512 over two time-of-day samples.
///
/// Two separate readings inject at least some jitter between the hash
/// updates. The digest is best-effort material, far weaker than OS
/// entropy; the resolver flags any seed produced here.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeHash;

impl TimeHash {
    /// Produces a 64-byte digest of two successive time samples.
    ///
    /// Cannot fail: reading the clock and hashing are unconditional.
    pub fn seed(&self) -> SeedMaterial {
        let mut hasher = Sha512::new();
        hasher.update(Self::now_bytes());
        hasher.update(Self::now_bytes());
        SeedMaterial::new(hasher.finalize().to_vec())
    }

    fn now_bytes() -> [u8; 12] {
        let now = Utc::now();
        let mut bytes = [0u8; 12];
        bytes[..8].copy_from_slice(&now.timestamp().to_le_bytes());
        bytes[8..].copy_from_slice(&now.timestamp_subsec_nanos().to_le_bytes());
        bytes
    }
}

impl SeedProvider for TimeHash {
    fn name(&self) -> &'static str {
        "time-hash"
    }

    fn try_seed(&self) -> Result<SeedMaterial, SeedUnavailable> {
        Ok(self.seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_entropy_default_request_size() {
        let material = OsEntropy::default().try_seed().unwrap();
        assert_eq!(material.len(), OS_REQUEST_BYTES);
    }

    #[test]
    fn test_os_entropy_custom_request_size() {
        let material = OsEntropy::new(64).try_seed().unwrap();
        assert_eq!(material.len(), 64);
    }

    #[test]
    fn test_os_entropy_not_all_zero() {
        // A 1024-byte all-zero read from the OS source would indicate a
        // broken boundary, not bad luck.
        let material = OsEntropy::default().try_seed().unwrap();
        assert!(material.as_bytes().iter().any(|&b| b != 0));
    }

    #[test]
    fn test_time_hash_digest_width() {
        let material = TimeHash.seed();
        assert_eq!(material.len(), 64);
        assert!(material.as_bytes().iter().any(|&b| b != 0));
    }
}
