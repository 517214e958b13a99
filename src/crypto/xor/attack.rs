use itertools::Itertools;

use crate::crypto::{common, xor};
use crate::util::Error;

/// Candidate key lengths tried by `guess_key_length`. Tunable: widen the
/// upper bound for ciphertexts suspected of carrying longer keys.
pub const MIN_KEY_LENGTH: usize = 1;
pub const MAX_KEY_LENGTH: usize = 7;

// Leading blocks sampled per candidate length.
const BLOCK_SAMPLES: usize = 8;

// Two blocks enciphered at the same key alignment XOR down to plaintext
// against plaintext, which sits closer in bit distance than any misaligned
// pairing, so the true key length accumulates the smallest total.
pub fn guess_key_length(cipher: &[u8]) -> usize {
    let mut best = (MIN_KEY_LENGTH, u32::MAX);
    for keysize in MIN_KEY_LENGTH..=MAX_KEY_LENGTH {
        let total: u32 = cipher.chunks_exact(keysize)
            .take(BLOCK_SAMPLES)
            .tuple_windows()
            .map(|(left, right)| common::bit_distance(left, right) / keysize as u32 )
            .sum();
        if total < best.1 {
            best = (keysize, total);
        }
    }
    best.0
}

#[test]
fn test_guess_key_length() {
    for key in [&b"aZ"[..], b"mKq", b"R8vz"] {
        let cipher = xor::repeating_key_xor(key, SAMPLE_PLAINTEXT).unwrap();
        assert_eq!(key.len(), guess_key_length(&cipher));
    }
}

#[test]
fn test_guess_key_length_degenerate_input() {
    // Nothing to compare; the scan falls through to the smallest candidate
    assert_eq!(MIN_KEY_LENGTH, guess_key_length(b""));
}

// Highest-scoring plausible candidate wins, so repeated runs are
// deterministic even when several key bytes pass the oracle.
pub fn attack_single_byte_xor_cipher(buf: &[u8]) -> Result<(u8, Vec<u8>), Error> {
    (0..=u8::MAX)
        .map(|key| (key, xor::byte_xor(buf, key)) )
        .filter(|(_, plaintext)| common::is_english(plaintext) )
        .max_by_key(|(_, plaintext)| common::english_score(plaintext) )
        .ok_or(Error::NoPlausibleKey {})
}

#[test]
fn test_attack_single_byte_xor_cipher() {
    let case = hex!("1b37373331363f78151b7f2b783431333d78397828372d363c78373e783a393b3736");
    let (key, plaintext) = attack_single_byte_xor_cipher(&case).unwrap();
    assert_eq!(b'X', key);
    assert_eq!(b"Cooking MC's like a pound of bacon".to_vec(), plaintext);
}

#[test]
fn test_attack_single_byte_xor_cipher_implausible() {
    // Too short to ever clear the space threshold
    assert_eq!(
        Err(Error::NoPlausibleKey {}),
        attack_single_byte_xor_cipher(b"ab"),
    );
}

pub fn attack_repeating_key_xor_cipher_fixed_keysize(buf: &[u8], keysize: usize) -> Result<(Vec<u8>, Vec<u8>), Error> {
    let key = common::transpose_blocks(buf, keysize)
        .iter()
        .map(|column| attack_single_byte_xor_cipher(column).map(|(key_byte, _)| key_byte) )
        .collect::<Result<Vec<u8>, Error>>()?;
    let plaintext = xor::repeating_key_xor(&key, buf)?;
    Ok((key, plaintext))
}

#[test]
fn test_attack_repeating_key_xor_cipher_fixed_keysize() {
    let cipher = xor::repeating_key_xor(b"R8vz", SAMPLE_PLAINTEXT).unwrap();
    let (key, plaintext) = attack_repeating_key_xor_cipher_fixed_keysize(&cipher, 4).unwrap();
    assert_eq!(b"R8vz".to_vec(), key);
    assert_eq!(SAMPLE_PLAINTEXT.to_vec(), plaintext);
}

#[test]
fn test_attack_repeating_key_xor_cipher_fixed_keysize_implausible_column() {
    // Columns of random-looking bytes never satisfy the oracle
    let cipher = hex!("8f93a2c4e01b7dd6");
    assert_eq!(
        Err(Error::NoPlausibleKey {}),
        attack_repeating_key_xor_cipher_fixed_keysize(&cipher, 2),
    );
}

pub fn attack_repeating_key_xor_cipher(buf: &[u8]) -> Result<(Vec<u8>, Vec<u8>), Error> {
    attack_repeating_key_xor_cipher_fixed_keysize(buf, guess_key_length(buf))
}

// A paragraph of ordinary prose; the transposed columns carry enough letter
// statistics for the per-column brute force to lock on.
#[cfg(test)]
pub(crate) const SAMPLE_PLAINTEXT: &[u8] =
    b"Nobody expects the cipher to give up its key on the first pass, but a \
      repeated key leaves a rhythm in the bits that a patient reader can tap \
      out line by line until the whole message opens up like a cheap lock \
      under a bent paperclip, which is all this exercise really amounts to \
      in the end.";
