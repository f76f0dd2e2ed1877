//! Seed material buffer type.

/// Seed bytes destined for a word source.
///
/// Consumed exactly once, at generator construction. `Debug` shows only
/// the length: seed material is secret.
#[derive(Clone)]
pub struct SeedMaterial {
    bytes: Vec<u8>,
}

impl SeedMaterial {
    /// Wraps raw bytes as seed material.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the material.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if there is no material.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&[u8]> for SeedMaterial {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl std::fmt::Debug for SeedMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedMaterial")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
