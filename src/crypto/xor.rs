pub mod attack;

use crate::util::Error;

pub fn fixed_xor(buf1: &[u8], buf2: &[u8]) -> Result<Vec<u8>, Error> {
    if buf1.len() != buf2.len() {
        return Err(Error::LengthMismatch { left: buf1.len(), right: buf2.len() });
    }
    Ok(buf1.iter()
        .zip(buf2.iter())
        .map(|(x,y)| x ^ y)
        .collect())
}

#[test]
fn test_fixed_xor() {
    let case_buf1 = hex!("1c0111001f010100061a024b53535009181c");
    let case_buf2 = hex!("686974207468652062756c6c277320657965");
    let expected = hex!("746865206b696420646f6e277420706c6179");
    let result = fixed_xor(&case_buf1, &case_buf2).unwrap();
    assert_eq!(result, expected);
    assert_eq!(b"the kid don't play".to_vec(), result);
}

#[test]
fn test_fixed_xor_length_mismatch() {
    assert_eq!(
        Err(Error::LengthMismatch { left: 4, right: 2 }),
        fixed_xor(b"abcd", b"ab"),
    );
}

#[test]
fn test_fixed_xor_commutes_and_inverts() {
    let a: [u8; 24] = crate::util::generate_random_bytes();
    let b: [u8; 24] = crate::util::generate_random_bytes();
    assert_eq!(fixed_xor(&a, &b), fixed_xor(&b, &a));
    let xored = fixed_xor(&a, &b).unwrap();
    assert_eq!(Ok(b.to_vec()), fixed_xor(&a, &xored));
}

pub fn byte_xor(buf: &[u8], b: u8) -> Vec<u8> {
    buf.iter()
        .map(|x| x ^ b )
        .collect()
}

pub fn repeating_key_xor(key: &[u8], buf: &[u8]) -> Result<Vec<u8>, Error> {
    if key.is_empty() {
        return Err(Error::EmptyKey {});
    }
    Ok(buf.iter()
        .enumerate()
        .map(|(i, x)| x ^ key[i % key.len()])
        .collect())
}

#[test]
fn test_repeating_key_xor() {
    let case = b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal";
    let key = b"ICE";
    let encoded = repeating_key_xor(key, case).unwrap();
    let expected = hex!("0b3637272a2b2e63622c2e69692a23693a2a3c6324202d623d63343c2a26226324272765272a282b2f20430a652e2c652a3124333a653e2b2027630c692b20283165286326302e27282f");
    assert_eq!(encoded, expected);
}

#[test]
fn test_repeating_key_xor_is_an_involution() {
    let data: [u8; 61] = crate::util::generate_random_bytes();
    let encoded = repeating_key_xor(b"ICE", &data).unwrap();
    assert_eq!(Ok(data.to_vec()), repeating_key_xor(b"ICE", &encoded));
}

#[test]
fn test_repeating_key_xor_empty_key() {
    assert_eq!(Err(Error::EmptyKey {}), repeating_key_xor(b"", b"data"));
}
