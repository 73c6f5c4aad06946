// src/lib.rs

pub mod cipher;
pub mod codec;
pub mod consts;
pub mod digest;
pub mod error;
pub mod logger;
pub mod secret;
pub mod utils;

// High-level API — what the binaries and most users import
pub use codec::stream::{stream_encode, StreamOptions};
pub use codec::{strip_whitespace, Alphabet, BASE32, BASE64, HEX};
pub use error::{KeyFault, SecretdecError};
pub use secret::{decrypt_secret, decrypt_secret_with};

// Seams for substituting test doubles in custom pipelines
pub use cipher::{Aes128Cbc, CipherContext, SecretCipher};
pub use digest::{CheckedPayload, SecretVerifier, Sha256CheckValue};
