pub mod codec;
pub mod common;
pub mod xor;

#[cfg(test)]
mod generic_tests {
    use crate::crypto::codec;
    use crate::crypto::xor;
    use crate::crypto::xor::attack;

    #[test]
    fn test_detect_single_byte_xor_encoded_line() {
        // One of these lines is a single-byte XOR of English text; the others
        // decrypt to junk under every key and are rejected by the oracle.
        let lines = [
            "0e3647e8592d35514a081243582536ed3de6734059001e3f535ce6271032",
            "334b041de124f73c18011a50e608097ac308ecee501337ec3e100854201d",
            "7b5a4215415d544115415d5015455447414c155c46155f4058455c5b523f",
        ];
        let recovered: Vec<Vec<u8>> = lines
            .iter()
            .map(|line| codec::hex_decode(line).expect("Hex decoding failed") )
            .filter_map(|cipher| attack::attack_single_byte_xor_cipher(&cipher).ok() )
            .map(|(_, plaintext)| plaintext )
            .collect();
        assert!(recovered.iter().any(|p| p == b"Now that the party is jumping\n" ));
    }

    #[test]
    fn test_break_repeating_key_xor_end_to_end() {
        let cipher = xor::repeating_key_xor(b"mKq", attack::SAMPLE_PLAINTEXT).unwrap();
        let (key, plaintext) = attack::attack_repeating_key_xor_cipher(&cipher).unwrap();
        assert_eq!(b"mKq".to_vec(), key);
        assert_eq!(attack::SAMPLE_PLAINTEXT.to_vec(), plaintext);
    }
}
