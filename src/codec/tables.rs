// src/codec/tables.rs

//! Alphabet symbol sets and const-built decode tables.

/// Marker for bytes outside an alphabet.
pub(crate) const INVALID: u8 = 0xFF;

/// Standard Base64 alphabet (RFC 4648).
pub(crate) const BASE64_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base32 alphabet of the secret export format: `A`-`Z` then `1`-`6`,
/// no padding symbol, uppercase only.
pub(crate) const BASE32_SYMBOLS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456";

/// Lowercase hexadecimal digits. Decoding also accepts uppercase.
pub(crate) const HEX_SYMBOLS: &[u8; 16] = b"0123456789abcdef";

/// Build a decode table mapping ASCII byte to symbol value, [`INVALID`]
/// everywhere else.
const fn build_table(symbols: &[u8]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Extend a hex decode table with the uppercase digits `A`-`F`.
const fn fold_hex_case(mut table: [u8; 256]) -> [u8; 256] {
    let mut c = b'A';
    while c <= b'F' {
        table[c as usize] = table[(c + 32) as usize];
        c += 1;
    }
    table
}

pub(crate) const BASE64_DECODE: [u8; 256] = build_table(BASE64_SYMBOLS);
pub(crate) const BASE32_DECODE: [u8; 256] = build_table(BASE32_SYMBOLS);
pub(crate) const HEX_DECODE: [u8; 256] = fold_hex_case(build_table(HEX_SYMBOLS));
