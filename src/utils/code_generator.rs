//! Short code generation.
//!
//! Codes are random, fixed-length, and independent of the submitted URL:
//! not a hash, not sequential, so creation order does not leak and codes
//! cannot be enumerated by incrementing. Uniqueness is probabilistic; there
//! is no collision check, a colliding code overwrites the earlier mapping.

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 5;

/// Alphabet codes are drawn from. Alphanumeric only, URL-safe by construction.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy. Bytes outside the largest multiple of the
/// alphabet size are rejected so every character is uniformly distributed.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    // 62 * 4 = 248; bytes in 248..=255 would bias the modulo and are skipped.
    const LIMIT: usize = ALPHABET.len() * (256 / ALPHABET.len());

    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; 16];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if code.len() == CODE_LENGTH {
                break;
            }
            if (byte as usize) < LIMIT {
                code.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
            }
        }
    }

    code
}
