//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, SecretdecError>`](SecretdecError).

use thiserror::Error;

/// Detail carried by [`SecretdecError::InvalidKey`].
///
/// A failed integrity check is deliberately reported as a key problem:
/// CBC decryption with a wrong key still "succeeds", so the only evidence
/// of a bad key is a check value that does not match.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFault {
    /// The decoded key is not exactly the cipher's key length.
    #[error("wrong size")]
    WrongSize,
    /// The decrypted content failed its integrity check.
    #[error("wrong password")]
    WrongPassword,
}

/// The error type for all codec and secret-decryption operations.
#[derive(Error, Debug)]
pub enum SecretdecError {
    /// Encoded input contains a byte outside the active alphabet.
    #[error("invalid character {0:#04x} in encoded input")]
    InvalidCharacter(u8),

    /// Encoded input length is not congruent to a valid encoding length
    /// for the active alphabet (e.g. an odd number of hex digits).
    #[error("invalid encoded input length")]
    InvalidLength,

    /// The output buffer cannot hold the worst-case result.
    #[error("output buffer too small")]
    Overflow,

    /// The key was rejected, either structurally or by the integrity check.
    #[error("invalid key: {0}")]
    InvalidKey(KeyFault),

    /// The Base32 secret value could not be decoded.
    #[error("secret value is not valid Base32")]
    InvalidSecretEncoding,

    /// Writing to the output sink failed. Short writes are fatal; partially
    /// flushed output is not rolled back.
    #[error("write to output failed")]
    Write(#[source] std::io::Error),

    /// I/O error while reading the input stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
