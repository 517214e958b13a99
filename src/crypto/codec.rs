use base64::{Engine as _, engine::general_purpose};
use hex::FromHexError;

// Hex decoding is strict: odd-length input and non-hex characters are errors
// rather than being silently mapped to zero bytes.
pub fn hex_decode(input: &str) -> Result<Vec<u8>, FromHexError> {
    hex::decode(input)
}

pub fn hex_encode(buf: &[u8]) -> String {
    hex::encode(buf)
}

#[test]
fn test_hex_round_trip() {
    assert_eq!(Ok(b"A".to_vec()), hex_decode("41"));
    assert_eq!(Ok(b"/".to_vec()), hex_decode("2F"));
    assert_eq!("2f", hex_encode(b"/"));
    assert_eq!("", hex_encode(b""));
    let case: [u8; 32] = crate::util::generate_random_bytes();
    assert_eq!(Ok(case.to_vec()), hex_decode(&hex_encode(&case)));
}

#[test]
fn test_hex_decode_rejects_malformed_input() {
    assert!(hex_decode("41f").is_err());
    assert!(hex_decode("4g").is_err());
}

pub fn base64_encode(buf: &[u8]) -> String {
    general_purpose::STANDARD.encode(buf)
}

pub fn base64_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(input)
}

#[test]
fn test_base64_round_trip() {
    assert_eq!("c29tZQ==", base64_encode(b"some"));
    assert_eq!(Ok(b"some".to_vec()), base64_decode("c29tZQ=="));
    let case: [u8; 33] = crate::util::generate_random_bytes();
    assert_eq!(Ok(case.to_vec()), base64_decode(&base64_encode(&case)));
}

pub fn hex_to_b64(input: &str) -> Result<String, FromHexError> {
    hex::decode(input)
        .map(|b| general_purpose::STANDARD.encode(b) )
}

#[test]
fn test_hex_to_b64() {
    let case = "49276d206b696c6c696e6720796f757220627261696e206c696b65206120706f69736f6e6f7573206d757368726f6f6d";
    let expected = Ok(String::from("SSdtIGtpbGxpbmcgeW91ciBicmFpbiBsaWtlIGEgcG9pc29ub3VzIG11c2hyb29t"));
    let result = hex_to_b64(case);
    assert_eq!(result, expected);
}
