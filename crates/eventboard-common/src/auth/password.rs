//! Password hashing with Argon2id. Hashes are PHC strings with the salt embedded.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(anyhow::anyhow!("password hashing failed: {e}")))
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("invalid password hash: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Length 8..=128 with at least one upper-case letter, one lower-case letter and one digit.
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(AppError::validation(format!(
            "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
        )));
    }

    let checks: [(fn(&char) -> bool, &str); 3] = [
        (char::is_ascii_uppercase, "an uppercase letter"),
        (char::is_ascii_lowercase, "a lowercase letter"),
        (char::is_ascii_digit, "a digit"),
    ];
    for (pred, what) in checks {
        if !password.chars().any(|c| pred(&c)) {
            return Err(AppError::validation(format!(
                "Password must contain at least {what}"
            )));
        }
    }
    Ok(())
}
