//! Word-draw assembly into an arbitrary-width integer.

use super::ChunkPlan;
use crate::source::WordSource;
use num_bigint::BigUint;
use num_traits::Zero;

/// Assembles a `width`-bit unsigned integer from word draws.
///
/// One draw per chunk in the greedy plan; each draw is masked to the
/// chunk width (low bits) and shifted into the accumulator, so the
/// earliest draws land in the most significant positions. A width of
/// zero returns zero without drawing a word.
///
/// Masking a fresh word below 32 bits discards the unused high bits of
/// that draw. The per-chunk output sequence is a compatibility
/// contract and is preserved as-is.
pub fn extract_bits<W: WordSource>(source: &mut W, width: usize) -> BigUint {
    let mut acc = BigUint::zero();
    for chunk in ChunkPlan::for_width(width) {
        let mask = if chunk == 32 {
            u32::MAX
        } else {
            (1u32 << chunk) - 1
        };
        let piece = source.next_word() & mask;
        acc <<= chunk;
        acc |= BigUint::from(piece);
    }
    acc
}
