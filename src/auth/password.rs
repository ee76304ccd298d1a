//! Password hashing and verification using Argon2

use crate::utils::error::{ApiError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Hash a plaintext password with a fresh random salt.
///
/// The plaintext is borrowed for the duration of the call and never stored;
/// only the encoded hash string survives.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Hashing(format!("Failed to hash password: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verify a plaintext password against a stored hash.
///
/// A mismatch is `Ok(false)`, not an error; only a hash that cannot be
/// parsed or a primitive failure produces `Err`. Callers decide what a
/// mismatch means.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ApiError::Hashing(format!("Failed to parse password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(ApiError::Hashing(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("secret").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("secret", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false_not_error() {
        let hash = hash_password("secret").unwrap();

        let result = verify_password("not-the-secret", &hash);
        assert!(matches!(result, Ok(false)));
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hash = hash_password("secret").unwrap();
        assert_ne!(hash, "secret");
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hash1 = hash_password("secret").unwrap();
        let hash2 = hash_password("secret").unwrap();

        // Fresh salt per call
        assert_ne!(hash1, hash2);
        assert!(verify_password("secret", &hash1).unwrap());
        assert!(verify_password("secret", &hash2).unwrap());
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let result = verify_password("secret", "definitely-not-a-phc-string");
        assert!(matches!(result, Err(ApiError::Hashing(_))));
    }

    #[test]
    fn test_verify_is_case_sensitive() {
        let hash = hash_password("Secret").unwrap();
        assert!(!verify_password("secret", &hash).unwrap());
    }
}
