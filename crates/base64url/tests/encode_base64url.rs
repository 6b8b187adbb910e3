//! Tests for URL-safe base64 encoding (to_base64_url).

use rand::Rng;
use urlsafe_base64::to_base64_url;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let base64url = to_base64_url(&blob);

        // Verify it's URL-safe (no +, /, or =)
        assert!(!base64url.contains('+'));
        assert!(!base64url.contains('/'));
        assert!(!base64url.contains('='));

        let standard = base64url.replace('-', "+").replace('_', "/");
        let standard = match standard.len() % 4 {
            2 => format!("{}==", standard),
            3 => format!("{}=", standard),
            _ => standard,
        };

        let expected = base64_encode(&blob);
        assert_eq!(
            standard,
            expected,
            "Failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64_url(b""), "");
}

#[test]
fn single_byte() {
    assert_eq!(to_base64_url(b"f"), "Zg");
}

#[test]
fn two_bytes() {
    assert_eq!(to_base64_url(b"fo"), "Zm8");
}

#[test]
fn three_bytes() {
    assert_eq!(to_base64_url(b"foo"), "Zm9v");
}

/// Bit-by-bit standard base64 encoding for cross-checking.
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
        result.push(if chunk.len() > 1 {
            ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char
        } else {
            '='
        });
        result.push(if chunk.len() > 2 {
            ALPHABET[(b2 & 0x3f) as usize] as char
        } else {
            '='
        });
    }

    result
}
