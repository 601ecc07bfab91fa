//! Random short code generation.

use rand::Rng;

use crate::domain::entities::{CODE_LENGTH, ShortCode};

/// The 62 symbols a short code is drawn from.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random six character code.
///
/// Each character is an independent uniform draw from [`ALPHABET`] using the
/// thread-local RNG. Codes are not secret; uniqueness comes from the store's
/// insert check, not from the generator.
pub fn generate_code() -> ShortCode {
    let mut rng = rand::rng();
    let code: String = (0..CODE_LENGTH)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect();

    ShortCode::parse(&code).unwrap_or_else(|| unreachable!("generated code {code} has wrong shape"))
}
