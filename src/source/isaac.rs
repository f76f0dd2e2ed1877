//! ISAAC-backed production word source.
//!
//! The ISAAC state mixing itself lives in the `rand_isaac` crate and is
//! treated as opaque. This wrapper handles seed intake and exposes the
//! word primitive, nothing more.

use super::WordSource;
use blake3::Hasher;
use rand_core::{RngCore, SeedableRng};
use rand_isaac::IsaacRng;

/// Domain separator for seed conditioning.
/// Keeps the hash context distinct from other BLAKE3 uses.
const SEED_DOMAIN: &[u8] = b"isaacgen-seed-v1";

/// Word source backed by the ISAAC generator.
///
/// Accepts seed material of any length: `rand_isaac` exposes a fixed
/// 32-byte seed intake, so the material is conditioned through a
/// domain-separated BLAKE3 hash first. Equal material produces an
/// identical word stream.
#[derive(Debug, Clone)]
pub struct IsaacWords {
    inner: IsaacRng,
}

impl IsaacWords {
    /// Seeds a word source from arbitrary-length material.
    ///
    /// The material is consumed here, at construction, and not retained.
    pub fn from_seed_material(material: &[u8]) -> Self {
        // seed = BLAKE3(domain || material), at the intake width
        let mut hasher = Hasher::new();
        hasher.update(SEED_DOMAIN);
        hasher.update(material);
        let seed: [u8; 32] = *hasher.finalize().as_bytes();

        Self {
            inner: IsaacRng::from_seed(seed),
        }
    }
}

impl WordSource for IsaacWords {
    fn next_word(&mut self) -> u32 {
        self.inner.next_u32()
    }

    // ISAAC has a native byte-fill; delegate instead of synthesizing
    // from word draws.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_material_equal_stream() {
        let mut a = IsaacWords::from_seed_material(b"material");
        let mut b = IsaacWords::from_seed_material(b"material");
        for _ in 0..64 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn test_different_material_diverges() {
        let mut a = IsaacWords::from_seed_material(b"material-a");
        let mut b = IsaacWords::from_seed_material(b"material-b");
        let wa: Vec<u32> = (0..8).map(|_| a.next_word()).collect();
        let wb: Vec<u32> = (0..8).map(|_| b.next_word()).collect();
        assert_ne!(wa, wb);
    }

    #[test]
    fn test_large_material_accepted() {
        let material = vec![0x5Au8; 1024];
        let mut a = IsaacWords::from_seed_material(&material);
        let mut b = IsaacWords::from_seed_material(&material);
        assert_eq!(a.next_word(), b.next_word());
    }

    #[test]
    fn test_native_fill_matches_clone() {
        let mut original = IsaacWords::from_seed_material(b"fill");
        let mut cloned = original.clone();

        let mut buf_a = [0u8; 33];
        let mut buf_b = [0u8; 33];
        original.fill_bytes(&mut buf_a);
        cloned.fill_bytes(&mut buf_b);

        assert_eq!(buf_a, buf_b);
    }
}
