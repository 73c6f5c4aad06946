// src/secret.rs

//! # Secret Decryption Pipeline
//!
//! Decode → decrypt → verify → write, in one synchronous pass:
//! hex-decode the key, Base32-decode the secret, split off the IV,
//! CBC-decrypt, check the embedded integrity tag, then emit the payload
//! (raw or hex) as a single write.
//!
//! Every sensitive buffer (decoded secret, key, decrypted record, hex
//! rendering) lives in a [`Zeroizing`] wrapper, so it is wiped on every
//! exit path, early error returns included.

use std::io::Write;

use zeroize::Zeroizing;

use crate::cipher::{Aes128Cbc, SecretCipher};
use crate::codec::{BASE32, HEX};
use crate::digest::{SecretVerifier, Sha256CheckValue};
use crate::error::{KeyFault, SecretdecError};

/// Decrypt a Base32-encoded secret with a hexadecimal AES-128 key and write
/// the recovered payload to `output`.
///
/// Facade over [`decrypt_secret_with`] using the shipped [`Aes128Cbc`]
/// cipher and [`Sha256CheckValue`] verifier.
pub fn decrypt_secret<W: Write>(
    secret_b32: &str,
    key_hex: &str,
    hex_output: bool,
    output: &mut W,
) -> Result<(), SecretdecError> {
    decrypt_secret_with(&Aes128Cbc, &Sha256CheckValue, secret_b32, key_hex, hex_output, output)
}

/// Pipeline body with substitutable cipher and verifier.
///
/// Failure in any step short-circuits the rest; the zeroing of sensitive
/// buffers is the only obligation that survives failure.
pub fn decrypt_secret_with<W: Write>(
    cipher: &dyn SecretCipher,
    verifier: &dyn SecretVerifier,
    secret_b32: &str,
    key_hex: &str,
    hex_output: bool,
    output: &mut W,
) -> Result<(), SecretdecError> {
    let key = Zeroizing::new(HEX.decode(key_hex.as_bytes())?);
    if key.len() != cipher.key_len() {
        return Err(SecretdecError::InvalidKey(KeyFault::WrongSize));
    }
    log::debug!("key decoded: {} bytes", key.len());

    // One extra zero block past the decoded data backs the exact-multiple
    // feeding convention below.
    let capacity = BASE32.decode_capacity(secret_b32.len()) + cipher.block_size();
    let mut secret = Zeroizing::new(vec![0u8; capacity]);
    let secret_len = BASE32
        .decode_into(secret_b32.as_bytes(), secret.as_mut_slice())
        .map_err(|_| SecretdecError::InvalidSecretEncoding)?;
    if secret_len < cipher.iv_len() {
        return Err(SecretdecError::InvalidSecretEncoding);
    }
    log::debug!("secret decoded: {secret_len} bytes");

    // Reference convention: when the decoded length is an exact multiple of
    // the block size, one extra (zero) byte is fed to the cipher. The update
    // step decrypts whole blocks only, so the byte is consumed but inert.
    let mut fed = secret_len;
    if fed % cipher.block_size() == 0 {
        fed += 1;
    }
    let iv = &secret[..cipher.iv_len()];
    let ciphertext = &secret[cipher.iv_len()..fed];

    let mut decrypted = Zeroizing::new(vec![0u8; capacity]);
    let mut context = cipher.init(&key, iv)?;
    let decrypted_len = context.update(ciphertext, decrypted.as_mut_slice())?;
    drop(context);
    log::debug!("decrypted: {decrypted_len} bytes");

    let payload = verifier
        .verify(&decrypted[..decrypted_len])
        .ok_or(SecretdecError::InvalidKey(KeyFault::WrongPassword))?;

    // Key and decoded secret are no longer needed; wipe them before output.
    drop(secret);
    drop(key);

    let payload_bytes = &decrypted[payload.start..payload.start + payload.len];
    if hex_output {
        let mut hex = Zeroizing::new(vec![0u8; HEX.encoded_len(payload.len, false)]);
        let written = HEX.encode_into(payload_bytes, hex.as_mut_slice(), false)?;
        output.write_all(&hex[..written]).map_err(SecretdecError::Write)?;
    } else {
        output.write_all(payload_bytes).map_err(SecretdecError::Write)?;
    }
    Ok(())
}
