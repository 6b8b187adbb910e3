//! Factory function for creating permissive decoders with custom alphabets.

use crate::constants::{ALPHABET_URL, LOOKUP};
use crate::decode_url_base64::decode_with_lookup;
use crate::Base64UrlError;

/// Creates a permissive base64 decoder function with a custom alphabet.
///
/// The returned decoder behaves like [`decode_url_base64`] (unknown bytes read
/// as the first symbol of the alphabet, output length `floor(len * 3 / 4)`),
/// only over the supplied alphabet.
///
/// [`decode_url_base64`]: crate::decode_url_base64
///
/// # Arguments
///
/// * `chars` - A 64-character string representing the base64 alphabet. Defaults to URL-safe base64.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 64 bytes long or repeats a symbol.
///
/// # Example
///
/// ```
/// use urlsafe_base64::create_decode_url_base64;
///
/// let decode = create_decode_url_base64(Some(
///     "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
/// ))
/// .unwrap();
/// assert_eq!(decode(b"+/+/"), [0xFB, 0xFF, 0xBF]);
/// ```
pub fn create_decode_url_base64(
    chars: Option<&str>,
) -> Result<impl Fn(&[u8]) -> Vec<u8> + Send + Sync + Clone, Base64UrlError> {
    let table = match chars {
        None | Some(ALPHABET_URL) => LOOKUP,
        Some(chars) => build_table(chars.as_bytes())?,
    };

    Ok(move |encoded: &[u8]| decode_with_lookup(&table, encoded))
}

fn build_table(chars: &[u8]) -> Result<[u8; 256], Base64UrlError> {
    if chars.len() != 64 {
        return Err(Base64UrlError::InvalidCharSetLength {
            length: chars.len(),
        });
    }

    let mut seen = [false; 256];
    let mut table = [0u8; 256];
    for (i, &c) in chars.iter().enumerate() {
        if seen[c as usize] {
            return Err(Base64UrlError::DuplicateChar { byte: c });
        }
        seen[c as usize] = true;
        table[c as usize] = i as u8;
    }

    tracing::debug!(alphabet = %String::from_utf8_lossy(chars), "built custom base64 lookup table");
    Ok(table)
}
