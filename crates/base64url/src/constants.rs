/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Marks a byte outside the alphabet in [`LOOKUP_STRICT`].
pub(crate) const INVALID: u8 = 0xFF;

/// Builds a 256-entry reverse table for `alphabet`, filling unknown bytes with `fill`.
pub(crate) const fn build_lookup(alphabet: &[u8; 64], fill: u8) -> [u8; 256] {
    let mut table = [fill; 256];
    let mut i = 0;
    while i < 64 {
        table[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Reverse lookup used by the permissive decoder. Bytes outside the alphabet map to 0,
/// same as `A`.
pub(crate) static LOOKUP: [u8; 256] = build_lookup(ALPHABET_URL_BYTES, 0);

/// Reverse lookup with [`INVALID`] for bytes outside the alphabet.
pub(crate) static LOOKUP_STRICT: [u8; 256] = build_lookup(ALPHABET_URL_BYTES, INVALID);

/// Returns `true` if `byte` is one of the 64 URL-safe base64 symbols.
///
/// # Example
///
/// ```
/// use urlsafe_base64::is_url_base64_char;
///
/// assert!(is_url_base64_char(b'-'));
/// assert!(!is_url_base64_char(b'+'));
/// assert!(!is_url_base64_char(b'='));
/// ```
#[inline]
pub fn is_url_base64_char(byte: u8) -> bool {
    LOOKUP_STRICT[byte as usize] != INVALID
}
