//! Mock intern credential generation
//!
//! Placeholder credentials with no entropy guarantees; never use for a real
//! account system.

use rand::Rng;

const PASSWORD_LEN: usize = 8;
// Base-36 alphabet, matching the original `toString(36)` password
const PASSWORD_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Usernames of the form `intern1234`
pub fn generate_username<R: Rng>(rng: &mut R) -> String {
    format!("intern{}", rng.gen_range(0..10000))
}

/// 8 lowercase alphanumeric characters
pub fn generate_password<R: Rng>(rng: &mut R) -> String {
    (0..PASSWORD_LEN)
        .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
        .collect()
}
