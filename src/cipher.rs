// src/cipher.rs

//! Block cipher seam for the secret decryption pipeline.
//!
//! [`SecretCipher`] mirrors the narrow contract the pipeline needs: the
//! cipher geometry plus an init/update lifecycle. Release is [`Drop`].
//! [`Aes128Cbc`] is the shipped implementation; tests substitute doubles
//! to exercise the pipeline without real cryptography.

use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes128Dec, Block as AesBlock};
use zeroize::Zeroize;

use crate::consts::{BLOCK_SIZE, IV_LEN, KEY_LEN};
use crate::error::{KeyFault, SecretdecError};
use crate::utils::xor_blocks;

/// One decryption run. Dropping the context releases it; implementations
/// wipe any chaining state they hold.
pub trait CipherContext {
    /// Decrypt the whole blocks of `input` into `output`, returning the
    /// number of plaintext bytes produced. A trailing partial block is
    /// consumed but never decrypted.
    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, SecretdecError>;
}

/// A CBC-mode block cipher usable by the pipeline.
pub trait SecretCipher {
    /// Cipher block size in bytes.
    fn block_size(&self) -> usize;
    /// Required key length in bytes.
    fn key_len(&self) -> usize;
    /// Initialization vector length in bytes.
    fn iv_len(&self) -> usize;
    /// Initialize a decryption context with `key` and `iv`.
    fn init(&self, key: &[u8], iv: &[u8]) -> Result<Box<dyn CipherContext>, SecretdecError>;
}

/// AES-128 in CBC mode: block decrypt via [`Aes128Dec`], chaining done
/// manually with [`xor_blocks`].
pub struct Aes128Cbc;

struct Aes128CbcContext {
    cipher: Aes128Dec,
    chain: [u8; BLOCK_SIZE],
}

impl SecretCipher for Aes128Cbc {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn key_len(&self) -> usize {
        KEY_LEN
    }

    fn iv_len(&self) -> usize {
        IV_LEN
    }

    fn init(&self, key: &[u8], iv: &[u8]) -> Result<Box<dyn CipherContext>, SecretdecError> {
        if iv.len() != IV_LEN {
            return Err(SecretdecError::InvalidSecretEncoding);
        }
        let cipher = Aes128Dec::new_from_slice(key)
            .map_err(|_| SecretdecError::InvalidKey(KeyFault::WrongSize))?;
        let mut chain = [0u8; BLOCK_SIZE];
        chain.copy_from_slice(iv);
        Ok(Box::new(Aes128CbcContext { cipher, chain }))
    }
}

impl CipherContext for Aes128CbcContext {
    fn update(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, SecretdecError> {
        let whole = input.len() - input.len() % BLOCK_SIZE;
        if output.len() < whole {
            return Err(SecretdecError::Overflow);
        }
        let mut written = 0usize;
        for chunk in input[..whole].chunks_exact(BLOCK_SIZE) {
            let mut block = *AesBlock::from_slice(chunk);
            self.cipher.decrypt_block(&mut block);
            xor_blocks(
                block.as_slice(),
                &self.chain,
                &mut output[written..written + BLOCK_SIZE],
            );
            self.chain.copy_from_slice(chunk);
            written += BLOCK_SIZE;
        }
        Ok(written)
    }
}

impl Drop for Aes128CbcContext {
    fn drop(&mut self) {
        self.chain.zeroize();
    }
}
