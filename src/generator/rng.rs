//! The public generator facade.

use super::Alphabet;
use crate::extraction;
use crate::seeding::SeedResolver;
use crate::source::{IsaacWords, WordSource};
use num_bigint::BigUint;
use rand_core::{impls, RngCore};

/// The default, ISAAC-backed generator.
pub type IsaacGenerator = Generator<IsaacWords>;

/// PRNG facade over a word source.
///
/// Owns exactly one [`WordSource`] and exposes three operations:
/// arbitrary bit-width extraction, raw byte output, and
/// alphabet-constrained string output. Every operation advances the
/// same word stream, so a generator must not be driven from multiple
/// threads without external synchronization.
///
/// # Example
///
/// ```
/// use isaacgen::{Alphabet, Generator};
///
/// let mut rng = Generator::from_seed(b"fixed seed");
/// let token = rng.random_string(12, &Alphabet::alphanumeric());
/// assert_eq!(token.chars().count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct Generator<W: WordSource = IsaacWords> {
    words: W,
}

impl Generator<IsaacWords> {
    /// Creates a generator seeded through the default resolver chain:
    /// OS entropy, then hashed time with a logged warning.
    pub fn new() -> Self {
        Self::with_resolver(&SeedResolver::default())
    }

    /// Creates a generator from caller-supplied seed bytes.
    ///
    /// Caller material always takes precedence: the resolver chain is
    /// bypassed entirely. Equal seeds produce identical output
    /// sequences.
    pub fn from_seed(seed: &[u8]) -> Self {
        Self {
            words: IsaacWords::from_seed_material(seed),
        }
    }

    /// Creates a generator seeded through an explicit resolver.
    pub fn with_resolver(resolver: &SeedResolver) -> Self {
        let material = resolver.resolve();
        Self {
            words: IsaacWords::from_seed_material(material.as_bytes()),
        }
    }
}

impl Default for Generator<IsaacWords> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: WordSource> Generator<W> {
    /// Wraps an existing word source.
    ///
    /// Mostly useful with [`ScriptedWords`](crate::ScriptedWords) in
    /// tests and examples.
    pub fn from_word_source(words: W) -> Self {
        Self { words }
    }

    /// Returns a `width`-bit unsigned integer.
    ///
    /// The most significant bits come from the earliest word draws;
    /// every requested bit is pseudo-random, with no silent truncation.
    /// `extract_bits(0)` returns zero without drawing a word.
    pub fn extract_bits(&mut self, width: usize) -> BigUint {
        extraction::extract_bits(&mut self.words, width)
    }

    /// Returns exactly `n` pseudo-random bytes.
    ///
    /// Delegates to the word source's byte-fill primitive.
    pub fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n];
        self.words.fill_bytes(&mut bytes);
        bytes
    }

    /// Returns an `n`-character string drawn from `alphabet`.
    ///
    /// One word draw per character; the first draw fills position 0.
    /// Each draw is reduced modulo the alphabet length, so selection is
    /// slightly non-uniform when the length does not divide 2^32.
    pub fn random_string(&mut self, n: usize, alphabet: &Alphabet) -> String {
        (0..n)
            .map(|_| alphabet.pick(self.words.next_word()))
            .collect()
    }

    /// Consumes the facade, returning the underlying word source.
    pub fn into_word_source(self) -> W {
        self.words
    }
}

impl<W: WordSource> RngCore for Generator<W> {
    fn next_u32(&mut self) -> u32 {
        self.words.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.words.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
