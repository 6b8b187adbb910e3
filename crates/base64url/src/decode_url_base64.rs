//! Permissive URL-safe base64 decoding.

use crate::constants::LOOKUP;

/// Number of bytes produced from `length` encoded symbols: `floor(length * 3 / 4)`.
#[inline]
pub(crate) fn decoded_len(length: usize) -> usize {
    length / 4 * 3 + (length % 4) * 3 / 4
}

/// Decodes `encoded` through a 256-entry reverse table.
///
/// Positions past the end of the input read as sextet 0 and the output is cut
/// to [`decoded_len`], so a trailing group of 2 or 3 symbols yields 1 or 2
/// bytes and a lone trailing symbol yields nothing.
pub(crate) fn decode_with_lookup(lookup: &[u8; 256], encoded: &[u8]) -> Vec<u8> {
    let buffer_length = decoded_len(encoded.len());
    let mut buf = Vec::with_capacity(buffer_length + 3);

    let mut chunks = encoded.chunks_exact(4);
    for chunk in chunks.by_ref() {
        let sextet0 = lookup[chunk[0] as usize];
        let sextet1 = lookup[chunk[1] as usize];
        let sextet2 = lookup[chunk[2] as usize];
        let sextet3 = lookup[chunk[3] as usize];
        push_triplet(&mut buf, sextet0, sextet1, sextet2, sextet3);
    }

    let rest = chunks.remainder();
    if !rest.is_empty() {
        let sextet = |i: usize| rest.get(i).map_or(0, |&c| lookup[c as usize]);
        push_triplet(&mut buf, sextet(0), sextet(1), sextet(2), sextet(3));
        buf.truncate(buffer_length);
    }

    buf
}

#[inline]
fn push_triplet(buf: &mut Vec<u8>, sextet0: u8, sextet1: u8, sextet2: u8, sextet3: u8) {
    buf.push((sextet0 << 2) | (sextet1 >> 4));
    buf.push(((sextet1 & 0xF) << 4) | (sextet2 >> 2));
    buf.push(((sextet2 & 0x3) << 6) | (sextet3 & 0x3F));
}

/// Decodes a URL-safe base64 string to bytes.
///
/// This is the permissive decoder: it never fails. Bytes outside the URL-safe
/// alphabet decode as `A` (sextet 0), and the output always has
/// `floor(len * 3 / 4)` bytes where `len` is the input length in bytes.
/// Unpadded input (length 2 or 3 mod 4) therefore decodes correctly; a single
/// dangling symbol is ignored. Use [`decode_url_base64_strict`] when the
/// input is not trusted.
///
/// [`decode_url_base64_strict`]: crate::decode_url_base64_strict
///
/// # Example
///
/// ```
/// use urlsafe_base64::decode_url_base64;
///
/// assert_eq!(decode_url_base64("aGVsbG8gd29ybGQ"), b"hello world");
/// assert_eq!(decode_url_base64("_-__"), [0xFF, 0xEF, 0xFF]);
/// ```
pub fn decode_url_base64(encoded: impl AsRef<[u8]>) -> Vec<u8> {
    decode_with_lookup(&LOOKUP, encoded.as_ref())
}
