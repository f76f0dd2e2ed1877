//! ISAAC-backed pseudo-random generation.
//!
//! A facade over an opaque, already-secure 32-bit word generator
//! (ISAAC, via [`rand_isaac`]) covering the three things callers
//! actually need from it:
//!
//! ```text
//! seeding → word source → bit extraction / string output
//! ```
//!
//! - **Seeding** ([`seeding`]): caller seeds take precedence; otherwise
//!   an ordered provider chain tries the OS secure random source and
//!   falls back to a SHA-512 hash of the current time, emitting a loud
//!   diagnostic because the fallback is materially weaker.
//! - **Extraction** ([`extraction`]): exact assembly of any requested
//!   bit width from 32-bit word draws, using a fixed greedy chunk
//!   order.
//! - **Generation** ([`generator`]): raw byte buffers and strings drawn
//!   from a caller-supplied alphabet.
//!
//! # Design Principles
//!
//! - **Opaque core**: the ISAAC state mixing is consumed as a
//!   dependency, never inspected or re-implemented.
//! - **Composition over inheritance**: the facade holds a
//!   [`WordSource`]; deterministic doubles plug in for tests.
//! - **Degrade loudly**: seeding never fails, but every step down the
//!   fallback chain is observable.
//!
//! # Example
//!
//! ```
//! use isaacgen::{Alphabet, Generator};
//!
//! // Explicit seed: fully deterministic output.
//! let mut rng = Generator::from_seed(b"example-seed");
//!
//! let token = rng.random_string(16, &Alphabet::alphanumeric());
//! assert_eq!(token.chars().count(), 16);
//!
//! let nonce = rng.extract_bits(96);
//! assert!(nonce.bits() <= 96);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod extraction;
pub mod generator;
pub mod seeding;
pub mod source;

// Re-export commonly used types at crate root
pub use generator::{Alphabet, AlphabetError, Generator, IsaacGenerator};
pub use seeding::{
    DiagnosticsSink, LogSink, MemorySink, OsEntropy, SeedEvent, SeedMaterial, SeedProvider,
    SeedResolver, SeedUnavailable, TimeHash,
};
pub use source::{IsaacWords, ScriptedWords, WordSource};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
