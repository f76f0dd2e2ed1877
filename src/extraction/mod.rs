//! Arbitrary bit-width extraction from fixed-width words.
//!
//! The word source only emits 32-bit words; callers want values of any
//! width. A greedy chunk decomposition covers the requested width
//! exactly, and big-endian assembly keeps the earliest draws in the
//! most significant positions.

mod assemble;
mod chunks;

pub use assemble::extract_bits;
pub use chunks::{ChunkPlan, CHUNK_BITS};
