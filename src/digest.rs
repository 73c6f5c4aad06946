// src/digest.rs

//! Integrity check of decrypted secrets.
//!
//! CBC decryption with a wrong key produces garbage without complaint, so
//! validity is established from the decrypted content itself: the plaintext
//! embeds a check value over the payload. [`SecretVerifier`] is the seam,
//! [`Sha256CheckValue`] the shipped record format.

use sha2::{Digest, Sha256};

/// Bytes of digest stored in front of the record.
pub const CHECK_VALUE_LEN: usize = 4;

/// Offset of the payload inside a decrypted record: check value plus a
/// 32-bit big-endian payload length.
pub const PAYLOAD_OFFSET: usize = CHECK_VALUE_LEN + 4;

/// Verified location of the payload inside the decrypted buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedPayload {
    /// Byte offset of the payload in the decrypted buffer.
    pub start: usize,
    /// Payload length; for text payloads the NUL terminator is excluded.
    pub len: usize,
    /// The payload is NUL-terminated text rather than raw bytes.
    pub is_text: bool,
}

/// Validates a decrypted buffer and locates the payload within it.
pub trait SecretVerifier {
    /// `None` means the buffer does not carry a passing check value, which
    /// the pipeline reports as a wrong key.
    fn verify(&self, decrypted: &[u8]) -> Option<CheckedPayload>;
}

/// Record format: `[check: 4][length: 4 BE][payload: length]`, zero-padded
/// to the block size. The check value is the first 4 bytes of the SHA-256
/// digest of the payload.
pub struct Sha256CheckValue;

impl SecretVerifier for Sha256CheckValue {
    fn verify(&self, decrypted: &[u8]) -> Option<CheckedPayload> {
        if decrypted.len() < PAYLOAD_OFFSET {
            return None;
        }
        let declared = u32::from_be_bytes(decrypted[CHECK_VALUE_LEN..PAYLOAD_OFFSET].try_into().ok()?) as usize;
        let end = PAYLOAD_OFFSET.checked_add(declared)?;
        if end > decrypted.len() {
            return None;
        }
        let payload = &decrypted[PAYLOAD_OFFSET..end];
        let digest = Sha256::digest(payload);
        if digest[..CHECK_VALUE_LEN] != decrypted[..CHECK_VALUE_LEN] {
            return None;
        }
        let is_text = payload.last() == Some(&0);
        Some(CheckedPayload {
            start: PAYLOAD_OFFSET,
            len: if is_text { declared - 1 } else { declared },
            is_text,
        })
    }
}
