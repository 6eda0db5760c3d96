//! Password hashing and generated passwords.
//!
//! Hashes are Argon2id PHC strings with a random salt, so parameters and salt travel
//! with the stored hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

use crate::server::error::internal::InternalError;

const RESET_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                               abcdefghijklmnopqrstuvwxyz\
                               0123456789";
const RESET_LENGTH: usize = 5;

pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored hash.
///
/// A stored value that is not a valid PHC string never verifies.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return Ok(false);
    };

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash(e.to_string())),
    }
}

/// Short alphanumeric password handed out by an admin reset.
pub fn generate_reset_password() -> String {
    let mut rng = rand::rng();

    (0..RESET_LENGTH)
        .map(|_| RESET_CHARSET[rng.random_range(0..RESET_CHARSET.len())] as char)
        .collect()
}
