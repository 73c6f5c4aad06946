// src/codec/stream.rs

//! Streaming Base64 encoder.
//!
//! Reads fixed-size chunks from a [`Read`] source until EOF, optionally
//! strips whitespace and hex-decodes first, Base64-encodes, and writes
//! line-wrapped output to a [`Write`] sink. Chunk boundaries never leak into
//! the output: groups of three input bytes (and a dangling hex digit) are
//! carried across reads, so the result is identical to encoding the whole
//! stream at once.

use std::io::{ErrorKind, Read, Write};

use crate::codec::{strip_whitespace, BASE64, HEX};
use crate::consts::{CHUNK_SIZE, DEFAULT_WRAP_WIDTH};
use crate::error::SecretdecError;

/// Worst-case encoded size of one chunk round (whole groups only).
const ENCODED_CAPACITY: usize = (CHUNK_SIZE / 3) * 4 + 4;

/// Options for [`stream_encode`].
#[derive(Debug, Clone, Copy)]
pub struct StreamOptions {
    /// Treat input as whitespace-tolerant hex text and decode it to binary
    /// before encoding.
    pub hex_input: bool,
    /// Append `=` padding to the final Base64 group when the input length is
    /// not a multiple of 3.
    pub pad: bool,
    /// Insert line breaks at `line_width` and append one trailing newline.
    pub wrap: bool,
    /// Output line width; ignored unless `wrap` is set. Width 0 disables
    /// breaking but keeps the trailing newline.
    pub line_width: u32,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            hex_input: false,
            pad: false,
            wrap: false,
            line_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Line-wrap state machine. `column` counts encoded characters already
/// emitted on the current output line and persists across chunks.
struct LineWrapper {
    wrap: bool,
    width: u32,
    column: u32,
}

impl LineWrapper {
    fn new(wrap: bool, width: u32) -> Self {
        Self {
            wrap,
            width,
            column: 0,
        }
    }

    /// Write encoded text, breaking lines at `width`.
    ///
    /// The break for a full line is emitted just before the first character
    /// of the next one, so a stream ending exactly at the line boundary gets
    /// its terminator from [`LineWrapper::finish`] rather than a blank line.
    fn write<W: Write>(&mut self, mut text: &[u8], out: &mut W) -> Result<(), SecretdecError> {
        if !self.wrap || self.width == 0 {
            return out.write_all(text).map_err(SecretdecError::Write);
        }
        while !text.is_empty() {
            if self.column == self.width {
                out.write_all(b"\n").map_err(SecretdecError::Write)?;
                self.column = 0;
            }
            let room = (self.width - self.column) as usize;
            let take = room.min(text.len());
            out.write_all(&text[..take]).map_err(SecretdecError::Write)?;
            self.column += take as u32;
            text = &text[take..];
        }
        Ok(())
    }

    /// Append the single trailing newline, wrap mode only.
    fn finish<W: Write>(&mut self, out: &mut W) -> Result<(), SecretdecError> {
        if self.wrap {
            out.write_all(b"\n").map_err(SecretdecError::Write)?;
        }
        Ok(())
    }
}

/// Encode a byte stream to Base64 and write it to `output`.
///
/// Blocking, single-pass, no rollback of already-flushed output on failure.
/// With [`StreamOptions::hex_input`], a hex digit split across reads is
/// carried over; a dangling digit at EOF is [`SecretdecError::InvalidLength`].
pub fn stream_encode<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &StreamOptions,
) -> Result<(), SecretdecError> {
    let mut wrapper = LineWrapper::new(options.wrap, options.line_width);
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut encoded = [0u8; ENCODED_CAPACITY];
    // partial Base64 group carried between reads
    let mut pending = [0u8; 3];
    let mut pending_len = 0usize;
    // odd hex digit carried between reads
    let mut hex_carry: Option<u8> = None;

    loop {
        let read = match input.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        let mut binary = [0u8; CHUNK_SIZE];
        let bytes: &[u8] = if options.hex_input {
            let mut digits = [0u8; CHUNK_SIZE + 1];
            let mut used = 0usize;
            if let Some(digit) = hex_carry.take() {
                digits[0] = digit;
                used = 1;
            }
            used += strip_whitespace(&chunk[..read], &mut digits[used..])?;
            if used % 2 == 1 {
                hex_carry = Some(digits[used - 1]);
                used -= 1;
            }
            let decoded = HEX.decode_into(&digits[..used], &mut binary)?;
            &binary[..decoded]
        } else {
            &chunk[..read]
        };

        // complete a carried group first
        let mut offset = 0usize;
        if pending_len > 0 {
            while pending_len < 3 && offset < bytes.len() {
                pending[pending_len] = bytes[offset];
                pending_len += 1;
                offset += 1;
            }
            if pending_len == 3 {
                let n = BASE64.encode_into(&pending, &mut encoded, false)?;
                wrapper.write(&encoded[..n], output)?;
                pending_len = 0;
            }
        }

        let rest = &bytes[offset..];
        let whole = rest.len() - rest.len() % 3;
        if whole > 0 {
            let n = BASE64.encode_into(&rest[..whole], &mut encoded, false)?;
            wrapper.write(&encoded[..n], output)?;
        }
        let tail = &rest[whole..];
        pending[..tail.len()].copy_from_slice(tail);
        pending_len = tail.len();
    }

    if hex_carry.is_some() {
        return Err(SecretdecError::InvalidLength);
    }
    if pending_len > 0 {
        let n = BASE64.encode_into(&pending[..pending_len], &mut encoded, options.pad)?;
        wrapper.write(&encoded[..n], output)?;
    }
    wrapper.finish(output)
}
