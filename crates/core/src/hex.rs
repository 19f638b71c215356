//! Hexadecimal encode/decode
//!
//! The decoder reproduces the behavior of the original timelock tool:
//! surrounding whitespace is trimmed, only complete two-character pairs are
//! consumed, and a trailing unpaired digit is silently dropped. Unlike the
//! original (which signalled failure with an empty buffer), an invalid digit
//! is reported as an explicit error.

use thiserror::Error;

/// Failure to decode a hex string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside `[0-9a-fA-F]` inside a digit pair
    #[error("invalid hex digit at offset {offset}")]
    InvalidDigit {
        /// Byte offset of the bad pair within the trimmed input
        offset: usize,
    },
}

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as lowercase hex, two characters per byte, no separators.
///
/// Total for any input; an empty slice encodes to an empty string.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for &byte in data {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string into bytes.
///
/// Leading and trailing whitespace is trimmed first. Pairs are consumed
/// left to right; if the trimmed length is odd, the final lone character is
/// ignored rather than rejected (parity with the original tool — callers
/// that need an exact length must check the result). The first pair
/// containing a non-hex character fails the whole decode; no partial buffer
/// is ever returned.
///
/// `decode("")` succeeds with an empty buffer. Callers expecting a fixed
/// number of bytes must treat that as a length failure.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = text.trim().as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    let mut offset = 0;
    while offset + 1 < bytes.len() {
        match (nibble(bytes[offset]), nibble(bytes[offset + 1])) {
            (Some(hi), Some(lo)) => out.push(hi << 4 | lo),
            _ => return Err(DecodeError::InvalidDigit { offset }),
        }
        offset += 2;
    }
    Ok(out)
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
