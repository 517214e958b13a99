use rand::RngCore;
use snafu::Snafu;

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display("buffer lengths differ: {} vs {}", left, right))]
    LengthMismatch { left: usize, right: usize },
    #[snafu(display("repeating-key XOR requires a non-empty key"))]
    EmptyKey {},
    #[snafu(display("no key byte decrypts to plausible English"))]
    NoPlausibleKey {},
}

pub fn generate_random_bytes<const N: usize>() -> [u8; N] {
    let mut data = [0u8; N];
    rand::thread_rng().fill_bytes(&mut data);
    data
}
