// src/codec/mod.rs

//! # Codec Engine
//!
//! Alphabet-driven Base-N transcoding: Base64, Base32 and hexadecimal share
//! one bit-packing engine parameterized by an [`Alphabet`]. The streaming
//! Base64 encoder with line wrapping lives in [`stream`].
//!
//! Buffer sizing is centralized in [`Alphabet::encoded_len`] and
//! [`Alphabet::decode_capacity`]; both the allocating and the `_into`
//! variants use them, so callers never hand-compute worst-case capacities.

pub mod stream;
mod tables;

use crate::error::SecretdecError;
use tables::{
    BASE32_DECODE, BASE32_SYMBOLS, BASE64_DECODE, BASE64_SYMBOLS, HEX_DECODE, HEX_SYMBOLS, INVALID,
};

/// An ordered symbol set defining a binary-to-text encoding.
///
/// Every `bits` input bits map to one symbol; decode is the inverse mapping.
/// Decoding any byte outside the alphabet (whitespace excepted for hex) fails
/// with [`SecretdecError::InvalidCharacter`].
pub struct Alphabet {
    symbols: &'static [u8],
    decode_table: &'static [u8; 256],
    /// Bits of input consumed per output symbol (6, 5 or 4).
    bits: u32,
    /// Padding symbol, Base64 only.
    pad: Option<u8>,
    /// Skip ASCII whitespace while decoding (hex only).
    skip_whitespace: bool,
}

/// Standard Base64 (RFC 4648), optional `=` padding.
pub const BASE64: Alphabet = Alphabet {
    symbols: BASE64_SYMBOLS,
    decode_table: &BASE64_DECODE,
    bits: 6,
    pad: Some(b'='),
    skip_whitespace: false,
};

/// Base32 over `A`-`Z` `1`-`6`, unpadded, as used by the secret export format.
pub const BASE32: Alphabet = Alphabet {
    symbols: BASE32_SYMBOLS,
    decode_table: &BASE32_DECODE,
    bits: 5,
    pad: None,
    skip_whitespace: false,
};

/// Hexadecimal, case-insensitive on decode, whitespace-tolerant.
pub const HEX: Alphabet = Alphabet {
    symbols: HEX_SYMBOLS,
    decode_table: &HEX_DECODE,
    bits: 4,
    pad: None,
    skip_whitespace: true,
};

impl Alphabet {
    /// Encoded length in symbols for `input_len` bytes, including padding
    /// when `pad` is requested and the alphabet carries a padding symbol.
    pub const fn encoded_len(&self, input_len: usize, pad: bool) -> usize {
        let symbols = (input_len * 8).div_ceil(self.bits as usize);
        if pad && self.pad.is_some() {
            symbols.div_ceil(4) * 4
        } else {
            symbols
        }
    }

    /// Upper bound on the decoded byte count for `input_len` symbols.
    /// Whitespace and padding only shrink the real result.
    pub const fn decode_capacity(&self, input_len: usize) -> usize {
        input_len * self.bits as usize / 8
    }

    /// Encode `input` into `out`, returning the number of symbols written.
    ///
    /// Fails with [`SecretdecError::Overflow`] before writing anything when
    /// `out` cannot hold the worst-case expansion. Base64 padding is appended
    /// only when `pad` is set and the input length is not a multiple of 3.
    pub fn encode_into(
        &self,
        input: &[u8],
        out: &mut [u8],
        pad: bool,
    ) -> Result<usize, SecretdecError> {
        if out.len() < self.encoded_len(input.len(), pad) {
            return Err(SecretdecError::Overflow);
        }

        let mask = (1u32 << self.bits) - 1;
        let mut acc = 0u32;
        let mut acc_bits = 0u32;
        let mut written = 0usize;

        for &byte in input {
            acc = (acc << 8) | u32::from(byte);
            acc_bits += 8;
            while acc_bits >= self.bits {
                acc_bits -= self.bits;
                out[written] = self.symbols[((acc >> acc_bits) & mask) as usize];
                written += 1;
            }
        }
        if acc_bits > 0 {
            out[written] = self.symbols[((acc << (self.bits - acc_bits)) & mask) as usize];
            written += 1;
        }
        if pad {
            if let Some(pad_symbol) = self.pad {
                while written % 4 != 0 {
                    out[written] = pad_symbol;
                    written += 1;
                }
            }
        }
        Ok(written)
    }

    /// Allocating variant of [`Alphabet::encode_into`].
    pub fn encode(&self, input: &[u8], pad: bool) -> Vec<u8> {
        let mut out = vec![0u8; self.encoded_len(input.len(), pad)];
        let written = self
            .encode_into(input, &mut out, pad)
            .expect("buffer sized by encoded_len");
        out.truncate(written);
        out
    }

    /// Decode `input` into `out`, returning the number of bytes written.
    ///
    /// Fails with [`SecretdecError::InvalidCharacter`] on any byte outside
    /// the alphabet (whitespace excepted for hex, trailing padding excepted
    /// for Base64), and with [`SecretdecError::InvalidLength`] when the
    /// symbol count cannot result from encoding any byte sequence.
    pub fn decode_into(&self, input: &[u8], out: &mut [u8]) -> Result<usize, SecretdecError> {
        let mut acc = 0u32;
        let mut acc_bits = 0u32;
        let mut written = 0usize;
        let mut symbols = 0usize;
        let mut seen_pad = false;

        for &byte in input {
            if self.skip_whitespace && byte.is_ascii_whitespace() {
                continue;
            }
            if self.pad == Some(byte) {
                seen_pad = true;
                continue;
            }
            if seen_pad {
                // data after padding can never round-trip
                return Err(SecretdecError::InvalidCharacter(byte));
            }
            let value = self.decode_table[byte as usize];
            if value == INVALID {
                return Err(SecretdecError::InvalidCharacter(byte));
            }
            symbols += 1;
            acc = (acc << self.bits) | u32::from(value);
            acc_bits += self.bits;
            if acc_bits >= 8 {
                acc_bits -= 8;
                if written == out.len() {
                    return Err(SecretdecError::Overflow);
                }
                out[written] = (acc >> acc_bits) as u8;
                written += 1;
            }
        }

        // A valid encoding leaves fewer than one symbol's worth of bits over.
        if (symbols * self.bits as usize) % 8 >= self.bits as usize {
            return Err(SecretdecError::InvalidLength);
        }
        Ok(written)
    }

    /// Allocating variant of [`Alphabet::decode_into`].
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>, SecretdecError> {
        let mut out = vec![0u8; self.decode_capacity(input.len())];
        let written = self.decode_into(input, &mut out)?;
        out.truncate(written);
        Ok(out)
    }
}

/// Remove ASCII whitespace from `input`, writing the survivors to `out`.
///
/// Stripping only removes bytes, so `out` as large as `input` can never
/// overflow; the check matters when stripping incrementally into a partially
/// filled buffer across chunk boundaries.
pub fn strip_whitespace(input: &[u8], out: &mut [u8]) -> Result<usize, SecretdecError> {
    let mut written = 0usize;
    for &byte in input {
        if byte.is_ascii_whitespace() {
            continue;
        }
        if written == out.len() {
            return Err(SecretdecError::Overflow);
        }
        out[written] = byte;
        written += 1;
    }
    Ok(written)
}
