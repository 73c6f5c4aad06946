//! # Constants
//!
//! Buffer sizing and cipher geometry shared by the codec engine and the
//! secret decryption pipeline.

/// AES-128 key length in bytes. A decoded key of any other length is rejected
/// before a decrypt is attempted.
pub const KEY_LEN: usize = 16;

/// CBC initialization vector length in bytes. The decoded secret starts with
/// an IV of exactly this size.
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Bytes read from the input stream per iteration of the streaming encoder.
///
/// Must be a multiple of 3 so that every non-final Base64 group is complete
/// and the wrapped output is independent of chunk boundaries.
pub const CHUNK_SIZE: usize = 120;

/// Default output line width for `--wrap-lines` when no width is given.
pub const DEFAULT_WRAP_WIDTH: u32 = 76;
