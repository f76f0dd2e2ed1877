//! Caller-supplied character alphabets.

use thiserror::Error;

/// Alphabet construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The character set was empty.
    #[error("alphabet must contain at least one character")]
    Empty,
}

/// An ordered, non-empty set of characters to draw string output from.
///
/// Validated at construction, so selection can never reduce modulo
/// zero. Characters keep their input order; duplicates are allowed and
/// weight selection accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `chars`, in order.
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        Self::from_chars(chars.chars().collect())
    }

    /// Builds an alphabet from an explicit character sequence.
    pub fn from_chars(chars: Vec<char>) -> Result<Self, AlphabetError> {
        if chars.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self { chars })
    }

    /// Lowercase letters, uppercase letters, digits.
    pub fn alphanumeric() -> Self {
        Self {
            chars: ('a'..='z').chain('A'..='Z').chain('0'..='9').collect(),
        }
    }

    /// Lowercase hexadecimal digits.
    pub fn hex_lower() -> Self {
        Self {
            chars: ('0'..='9').chain('a'..='f').collect(),
        }
    }

    /// Number of characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; empty alphabets cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The characters, in selection order.
    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Selects the character for one word draw.
    ///
    /// The draw is reduced modulo the alphabet length, so selection is
    /// slightly non-uniform when the length does not divide 2^32.
    #[inline]
    pub fn pick(&self, word: u32) -> char {
        self.chars[word as usize % self.chars.len()]
    }
}

impl std::str::FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
