//! The generator facade: seeding, extraction, and string output.
//!
//! [`Generator`] owns a word source and exposes the three documented
//! operations; [`Alphabet`] constrains string output to a validated,
//! non-empty character set.

mod alphabet;
mod rng;

pub use alphabet::{Alphabet, AlphabetError};
pub use rng::{Generator, IsaacGenerator};
