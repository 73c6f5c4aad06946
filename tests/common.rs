//! tests/common.rs
//! Shared fixture builders for secret decryption tests.
//!
//! The encryption side of the secret format is not part of the crate, so the
//! tests carry their own: build the check-value record, CBC-encrypt it, and
//! Base32-encode the IV-prefixed blob.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Block as AesBlock};
use sha2::{Digest, Sha256};

use secretdec_rs::{BASE32, HEX};

/// Key used by most fixtures, hex form.
#[allow(dead_code)] // used across multiple test files
pub const TEST_KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";

/// Fixed IV so fixtures are deterministic.
#[allow(dead_code)] // used across multiple test files
pub const TEST_IV: [u8; 16] = *b"0123456789abcdef";

#[allow(dead_code)] // used across multiple test files
pub fn test_key() -> [u8; 16] {
    let decoded = HEX.decode(TEST_KEY_HEX.as_bytes()).unwrap();
    decoded.try_into().unwrap()
}

/// CBC-encrypt a block-aligned plaintext.
#[allow(dead_code)] // used across multiple test files
pub fn cbc_encrypt(key: &[u8; 16], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    assert_eq!(
        plaintext.len() % 16,
        0,
        "fixture plaintext must be block-aligned"
    );
    let cipher = Aes128Enc::new(key.into());
    let mut out = Vec::with_capacity(plaintext.len());
    let mut chain = *iv;
    for block in plaintext.chunks_exact(16) {
        let mut xored = [0u8; 16];
        for (i, byte) in xored.iter_mut().enumerate() {
            *byte = block[i] ^ chain[i];
        }
        let mut aes_block = AesBlock::from(xored);
        cipher.encrypt_block(&mut aes_block);
        chain.copy_from_slice(aes_block.as_slice());
        out.extend_from_slice(aes_block.as_slice());
    }
    out
}

/// Build the plaintext record: check value, big-endian length, payload,
/// zero padding up to the block size.
#[allow(dead_code)] // used across multiple test files
pub fn build_record(payload: &[u8]) -> Vec<u8> {
    let digest = Sha256::digest(payload);
    let mut record = Vec::with_capacity(8 + payload.len() + 15);
    record.extend_from_slice(&digest[..4]);
    record.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    record.extend_from_slice(payload);
    while record.len() % 16 != 0 {
        record.push(0);
    }
    record
}

/// Full fixture: Base32 text of `iv || cbc_encrypt(record(payload))`.
#[allow(dead_code)] // used across multiple test files
pub fn make_secret(key: &[u8; 16], iv: &[u8; 16], payload: &[u8]) -> String {
    let record = build_record(payload);
    let mut blob = iv.to_vec();
    blob.extend_from_slice(&cbc_encrypt(key, iv, &record));
    String::from_utf8(BASE32.encode(&blob, false)).unwrap()
}
