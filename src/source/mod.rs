//! Word sources: the boundary to the underlying generator.
//!
//! Everything above this module treats the generator as a black box that
//! emits fixed-width 32-bit words. The production implementation wraps
//! the ISAAC generator from `rand_isaac`; a scripted double replays a
//! fixed word sequence for tests and examples.

mod isaac;
mod word;

pub use isaac::IsaacWords;
pub use word::{ScriptedWords, WordSource};
