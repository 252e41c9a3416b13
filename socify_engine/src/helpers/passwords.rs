use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use log::warn;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("Could not hash password. {0}")]
pub struct PasswordError(String);

/// Hashes `password` with Argon2 (default parameters) and a fresh random salt. The result is a PHC string that embeds
/// the algorithm, parameters and salt.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt).map_err(|e| PasswordError(e.to_string()))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let parsed = match PasswordHash::new(password_hash) {
        Ok(h) => h,
        Err(e) => {
            warn!("🔐️ Stored password hash could not be parsed. {e}");
            return false;
        },
    };
    Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok()
}
