//! URL-safe base64 encoding function.

use crate::constants::ALPHABET_URL_BYTES;

/// Pre-computed two-character lookup table for base64url encoding.
/// Each entry holds the two symbols for one 12-bit value.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_URL_BYTES[i];
            table[idx][1] = ALPHABET_URL_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Encodes a byte slice to a URL-safe base64 string.
///
/// This uses the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and does not add padding.
///
/// # Example
///
/// ```
/// use urlsafe_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(b"hello world"), "aGVsbG8gd29ybGQ");
/// assert_eq!(to_base64_url(&[0xFF, 0xEF, 0xFF]), "_-__");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    let length = uint8.len();
    let mut out = String::with_capacity(length.div_ceil(3) * 4);

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let o1 = uint8[i];
        let o2 = uint8[i + 1];
        let o3 = uint8[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        push_pair(&mut out, v1);
        push_pair(&mut out, v2);
        i += 3;
    }

    if extra_length == 1 {
        let o1 = uint8[base_length];
        push_pair(&mut out, (o1 as usize) << 4);
    } else if extra_length == 2 {
        let o1 = uint8[base_length];
        let o2 = uint8[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;

        push_pair(&mut out, v1);
        out.push(ALPHABET_URL_BYTES[v2] as char);
    }

    out
}

#[inline]
fn push_pair(out: &mut String, v: usize) {
    out.push(TABLE2[v][0] as char);
    out.push(TABLE2[v][1] as char);
}
