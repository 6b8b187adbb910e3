//! Validating URL-safe base64 decoding.

use crate::constants::{INVALID, LOOKUP_STRICT};
use crate::decode_url_base64::decode_with_lookup;
use crate::Base64UrlError;

/// Decodes a URL-safe base64 string, rejecting malformed input.
///
/// Accepts exactly the inputs produced by [`to_base64_url`]: unpadded text
/// over the URL-safe alphabet whose length is not 1 mod 4. On success the
/// result is identical to [`decode_url_base64`].
///
/// [`to_base64_url`]: crate::to_base64_url
/// [`decode_url_base64`]: crate::decode_url_base64
///
/// # Errors
///
/// - [`Base64UrlError::InvalidLength`] if the length is 1 mod 4.
/// - [`Base64UrlError::InvalidCharacter`] for the first byte outside the
///   alphabet, including `=` padding.
///
/// # Example
///
/// ```
/// use urlsafe_base64::{decode_url_base64_strict, Base64UrlError};
///
/// assert_eq!(decode_url_base64_strict("Zm8").unwrap(), b"fo");
/// assert_eq!(
///     decode_url_base64_strict("Zm8="),
///     Err(Base64UrlError::InvalidCharacter { position: 3, byte: b'=' }),
/// );
/// ```
pub fn decode_url_base64_strict(encoded: impl AsRef<[u8]>) -> Result<Vec<u8>, Base64UrlError> {
    let encoded = encoded.as_ref();

    if encoded.len() % 4 == 1 {
        tracing::debug!(length = encoded.len(), "base64url input has a dangling symbol");
        return Err(Base64UrlError::InvalidLength {
            length: encoded.len(),
        });
    }

    if let Some(position) = encoded
        .iter()
        .position(|&c| LOOKUP_STRICT[c as usize] == INVALID)
    {
        let byte = encoded[position];
        tracing::debug!(position, byte, "base64url input has a symbol outside the alphabet");
        return Err(Base64UrlError::InvalidCharacter { position, byte });
    }

    // Every byte is in the alphabet, so the strict table never yields INVALID here.
    Ok(decode_with_lookup(&LOOKUP_STRICT, encoded))
}
