//! Password hashing for seeded accounts.
//!
//! Hashes are Argon2id with default parameters, the same scheme the
//! application's login path verifies against.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::config::PasswordFormat;
use crate::db::SeedError;

/// Algorithm prefix Django's `Argon2PasswordHasher` puts in front of the PHC string.
const DJANGO_ARGON2_PREFIX: &str = "argon2";

pub fn hash_password(password: &str, format: PasswordFormat) -> Result<String, SeedError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SeedError::PasswordHash(e.to_string()))?;

    Ok(match format {
        PasswordFormat::Phc => hash.to_string(),
        PasswordFormat::Django => format!("{DJANGO_ARGON2_PREFIX}{hash}"),
    })
}

/// Verifies a password against a hash in either supported encoding.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, SeedError> {
    let phc = match hash.strip_prefix(DJANGO_ARGON2_PREFIX) {
        Some(rest) if rest.starts_with('$') => rest,
        _ => hash,
    };
    let parsed_hash =
        PasswordHash::new(phc).map_err(|e| SeedError::PasswordHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
