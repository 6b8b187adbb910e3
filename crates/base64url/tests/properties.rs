//! Property tests for the encoder/decoder pair.

use proptest::prelude::*;
use urlsafe_base64::{
    create_decode_url_base64, decode_url_base64, decode_url_base64_strict, to_base64_url,
};

proptest! {
    #[test]
    fn round_trips_any_blob(blob in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = to_base64_url(&blob);
        prop_assert_eq!(decode_url_base64(&encoded), blob.clone());
        prop_assert_eq!(decode_url_base64_strict(&encoded).unwrap(), blob);
    }

    #[test]
    fn aligned_input_decodes_to_three_quarters(encoded in "[A-Za-z0-9_-]{0,32}") {
        let aligned = &encoded[..encoded.len() / 4 * 4];
        prop_assert_eq!(decode_url_base64(aligned).len(), aligned.len() / 4 * 3);
    }

    #[test]
    fn valid_text_re_encodes_canonically(groups in proptest::collection::vec(any::<[u8; 3]>(), 0..32)) {
        let blob: Vec<u8> = groups.concat();
        let encoded = to_base64_url(&blob);
        prop_assert_eq!(to_base64_url(&decode_url_base64(&encoded)), encoded);
    }

    #[test]
    fn default_factory_matches_decoder(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let decode = create_decode_url_base64(None).unwrap();
        prop_assert_eq!(decode(&input), decode_url_base64(&input));
    }
}
