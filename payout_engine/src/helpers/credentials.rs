//! # Vendor credential digests
//!
//! Passwords are never stored. Instead we keep an Argon2id hash in PHC string format, e.g.
//!
//! ```text
//!    $argon2id$v=19$m=19456,t=2,p=1${salt_b64}${hash_b64}
//! ```
//!
//! The PHC string carries the algorithm parameters and the salt, so digests stay verifiable if the defaults change.
use argon2::{
    password_hash::{
        rand_core::OsRng,
        Error as PasswordHashError,
        PasswordHash,
        PasswordHasher,
        PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use nps_common::Secret;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Could not hash the password: {0}")]
    HashingFailed(String),
    #[error("Malformed credential digest: {0}")]
    MalformedDigest(String),
}

/// Produces a freshly salted Argon2id digest of `password`.
pub fn hash_password(password: &str) -> Result<Secret<String>, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CredentialError::HashingFailed(e.to_string()))?;
    Ok(Secret::new(hash.to_string()))
}

/// Checks `password` against a digest produced by [`hash_password`].
///
/// A wrong password is `Ok(false)`. A digest that cannot be parsed is an error.
pub fn verify_password(password: &str, stored: &Secret<String>) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(stored.reveal()).map_err(|e| CredentialError::MalformedDigest(e.to_string()))?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PasswordHashError::Password) => Ok(false),
        Err(e) => Err(CredentialError::MalformedDigest(e.to_string())),
    }
}
