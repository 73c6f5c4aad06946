// src/utils.rs

//! Utility functions used across the library.

use crate::consts::BLOCK_SIZE;

/// XORs two cipher blocks and writes the result to `output`.
///
/// Used by the CBC chaining step of [`crate::cipher::Aes128Cbc`].
///
/// # Panics (by contract)
///
/// Panics if any of the three slices is shorter than [`BLOCK_SIZE`]. All
/// callers pass exact-size block slices, so this is never hit in correct
/// usage.
#[inline(always)]
pub const fn xor_blocks(block_a: &[u8], block_b: &[u8], output: &mut [u8]) {
    let mut i = 0;
    while i < BLOCK_SIZE {
        output[i] = block_a[i] ^ block_b[i];
        i += 1;
    }
}
