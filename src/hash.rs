//! Password hashing utilities.

use tracing::warn;

use crate::error::{Error, Result};

/// Hash a password with bcrypt, producing a `$2b$` string.
pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).map_err(|e| Error::persistence("hash password", e))
}

/// Check a password against a bcrypt hash.
///
/// A hash bcrypt cannot parse counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match bcrypt::verify(password, hash) {
        Ok(valid) => valid,
        Err(e) => {
            warn!(error = %e, "stored bcrypt hash is malformed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BCRYPT_MARKER;

    #[test]
    fn test_hash_uses_2b_marker() {
        let hash = hash_password("password", 4).unwrap();
        assert!(hash.starts_with(BCRYPT_MARKER));
        assert_eq!(hash.len(), 60);
    }

    #[test]
    fn test_verify_password() {
        let hash = hash_password("test123", 4).unwrap();
        assert!(verify_password("test123", &hash));
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("Test123", &hash));
    }

    #[test]
    fn test_salted() {
        let hash1 = hash_password("my_secret_password", 4).unwrap();
        let hash2 = hash_password("my_secret_password", 4).unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        assert!(!verify_password("anything", "$2b$not-a-real-hash"));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        assert!(matches!(hash_password("pw", 2), Err(Error::Persistence(_))));
    }
}
