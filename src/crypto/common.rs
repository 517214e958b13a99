use lazy_static::lazy_static;

use crate::util::Error;

// Per-byte plausibility weights. Anything unprintable is punished hard enough
// that a single stray control byte sinks an otherwise clean candidate.
fn byte_scores() -> [i32; 256] {
    let mut scores = [0i32; 256];
    for b in 0..=u8::MAX {
        scores[b as usize] = match b {
            b'\t' | b'\n' | b'\r' => 0,
            b' ' => 4,
            b'a' | b'e' | b'i' | b'o' | b'u'
            | b'A' | b'E' | b'I' | b'O' | b'U' => 3,
            b'a'..=b'z' | b'A'..=b'Z' => 1,
            _ if b < 0x1f || b > 0x7f => -200,
            _ => 0,
        };
    }
    scores
}

lazy_static! {
    // We cannot build this in a const context without unrolling the ranges
    // by hand, so it is initialised on first use and read-only afterwards
    static ref BYTE_SCORES: [i32; 256] = byte_scores();
}

pub fn english_score(buf: &[u8]) -> i32 {
    buf.iter()
        .map(|&b| BYTE_SCORES[b as usize] )
        .sum()
}

// A coarse oracle, not a language model: demands a sentence's worth of
// spaces on top of a positive score, and tolerates the occasional false
// verdict in both directions.
pub fn is_english(buf: &[u8]) -> bool {
    let spaces = buf.iter().filter(|&&b| b == b' ').count();
    spaces > 4 && english_score(buf) > 0
}

#[test]
fn test_is_english() {
    assert!(is_english(b"Cooking MC's like a pound of bacon"));
    // High score but too few spaces
    assert!(!is_english(b"aeiou aeiou"));
    // Enough spaces but a control byte sinks the score
    assert!(!is_english(b"a b c d e f\x00"));
    assert!(!is_english(b""));
}

pub(crate) fn bit_distance(buf1: &[u8], buf2: &[u8]) -> u32 {
    buf1.iter()
        .zip(buf2.iter())
        .map(|(x,y)| x ^ y )
        .map(|z| z.count_ones() )
        .sum()
}

pub fn hamming_distance(buf1: &[u8], buf2: &[u8]) -> Result<u32, Error> {
    if buf1.len() != buf2.len() {
        return Err(Error::LengthMismatch { left: buf1.len(), right: buf2.len() });
    }
    Ok(bit_distance(buf1, buf2))
}

#[test]
fn test_hamming_distance() {
    assert_eq!(Ok(37), hamming_distance(b"this is a test", b"wokka wokka!!!"));
    assert_eq!(
        hamming_distance(b"wokka wokka!!!", b"this is a test"),
        hamming_distance(b"this is a test", b"wokka wokka!!!"),
    );
    assert_eq!(Ok(0), hamming_distance(b"abc", b"abc"));
    assert_eq!(
        Err(Error::LengthMismatch { left: 3, right: 2 }),
        hamming_distance(b"abc", b"ab"),
    );
}

// Column i collects the bytes at positions congruent to i mod count; bytes
// past the last full round are dropped.
pub fn transpose_blocks(src: &[u8], count: usize) -> Vec<Vec<u8>> {
    assert!(count > 0);
    let rows = src.len() / count;
    let mut blocks = vec![vec![0u8; rows]; count];
    for (i, &b) in src.iter().take(rows * count).enumerate() {
        blocks[i % count][i / count] = b;
    }
    blocks
}

#[test]
fn test_transpose_blocks() {
    let transposed = transpose_blocks(b"This is a test stream!", 2);
    assert_eq!(transposed[0], b"Ti sats tem");
    assert_eq!(transposed[1], b"hsi  etsra!");
}

#[test]
fn test_transpose_blocks_drops_partial_round() {
    assert_eq!(vec![b"ac".to_vec(), b"bd".to_vec()], transpose_blocks(b"abcde", 2));
}
