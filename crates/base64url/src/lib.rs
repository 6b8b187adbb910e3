//! URL-safe base64 decoding and encoding utilities.
//!
//! This crate provides:
//! - A permissive, table-driven decoder that never fails
//! - A strict decoder that rejects malformed input
//! - An unpadded URL-safe encoder
//! - Decoders over custom 64-symbol alphabets
//!
//! # Example
//!
//! ```
//! use urlsafe_base64::{decode_url_base64, decode_url_base64_strict, to_base64_url};
//!
//! let data = b"hello world";
//! let encoded = to_base64_url(data);
//! assert_eq!(decode_url_base64(&encoded), data);
//! assert_eq!(decode_url_base64_strict(&encoded).unwrap(), data);
//! ```

use thiserror::Error;

mod constants;
mod create_decode_url_base64;
mod decode_url_base64;
mod decode_url_base64_strict;
mod to_base64_url;

pub use constants::{is_url_base64_char, ALPHABET_URL, ALPHABET_URL_BYTES};
pub use create_decode_url_base64::create_decode_url_base64;
pub use decode_url_base64::decode_url_base64;
pub use decode_url_base64_strict::decode_url_base64_strict;
pub use to_base64_url::to_base64_url;

/// Error type for base64url operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64UrlError {
    /// The input ends with a single symbol, which no encoder produces.
    #[error("base64url length {length} leaves a dangling symbol")]
    InvalidLength { length: usize },
    /// The input contains a byte outside the URL-safe alphabet.
    #[error("invalid base64url byte 0x{byte:02X} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
    /// The character set must be exactly 64 characters.
    #[error("chars must be 64 characters long, got {length}")]
    InvalidCharSetLength { length: usize },
    /// The character set repeats a symbol.
    #[error("chars must not repeat, 0x{byte:02X} appears twice")]
    DuplicateChar { byte: u8 },
}
