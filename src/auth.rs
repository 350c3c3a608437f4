//! # Auth Module
//!
//! Credential verification, user listing and user creation on top of the
//! [`CredentialStore`].
//!
//! Verification is dual-mode: rows holding a `$2b$` bcrypt hash are checked
//! with bcrypt verify, legacy rows holding plaintext are compared for exact
//! equality. New users are always stored hashed.

use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::hash::{hash_password, verify_password};
use crate::models::{AuthResponse, Credential, PublicUser, StatusResponse, UserRecord};
use crate::store::CredentialStore;

#[derive(Debug, Clone)]
pub struct Authenticator {
    store: CredentialStore,
    bcrypt_cost: u32,
}

impl Authenticator {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            store: CredentialStore::new(config),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Verify `password` against the first record stored for `email`.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let Some(record) = self.store.find_by_email(email)? else {
            debug!(email, "no such user");
            return Err(Error::InvalidCredentials);
        };
        if credential_matches(&record.credential, password) {
            Ok(AuthResponse::authenticated(email))
        } else {
            debug!(email, hashed = record.credential.is_hashed(), "password mismatch");
            Err(Error::InvalidCredentials)
        }
    }

    /// Every stored user with the credential stripped.
    pub fn list_users(&self) -> Result<Vec<PublicUser>> {
        Ok(self.store.list()?.iter().map(UserRecord::to_public).collect())
    }

    /// Hash `password` and append a new user.
    ///
    /// The existence check and the append are separate steps; two concurrent
    /// creates for one email can both succeed.
    pub fn create_user(&self, email: &str, password: &str) -> Result<StatusResponse> {
        if self.store.list()?.iter().any(|u| u.email == email) {
            return Err(Error::UserAlreadyExists(email.to_string()));
        }
        let hash = hash_password(password, self.bcrypt_cost)?;
        self.store
            .append(&UserRecord::new(email, Credential::Hashed(hash)))?;
        info!(email, "created user");
        Ok(StatusResponse::created(email))
    }
}

fn credential_matches(credential: &Credential, candidate: &str) -> bool {
    match credential {
        Credential::Hashed(hash) => verify_password(candidate, hash),
        // Legacy rows only
        Credential::Plaintext(stored) => stored == candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn authenticator(users: &str) -> (TempDir, Authenticator) {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::in_dir(temp_dir.path()).with_bcrypt_cost(4);
        std::fs::write(&config.users_path, users).unwrap();
        (temp_dir, Authenticator::new(&config))
    }

    #[test]
    fn test_plaintext_requires_exact_match() {
        let (_dir, auth) = authenticator("email,password\njona@x.com,Jona2025\n");

        let ok = auth.authenticate("jona@x.com", "Jona2025").unwrap();
        assert_eq!(ok.status, "authenticated");
        assert_eq!(ok.message, "Login successful");

        assert!(matches!(
            auth.authenticate("jona@x.com", "jona2025"),
            Err(Error::InvalidCredentials)
        ));
        assert!(matches!(
            auth.authenticate("jona@x.com", "Jona2025 "),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashed_credential_verifies() {
        let hash = hash_password("Windmill2025", 4).unwrap();
        let (_dir, auth) = authenticator(&format!("email,password_hash\ns@x.com,{hash}\n"));

        assert!(auth.authenticate("s@x.com", "Windmill2025").is_ok());
        assert!(matches!(
            auth.authenticate("s@x.com", hash.as_str()),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_only_first_duplicate_is_considered() {
        let (_dir, auth) = authenticator("email,password\na@x.com,first\na@x.com,second\n");
        assert!(auth.authenticate("a@x.com", "first").is_ok());
        assert!(matches!(
            auth.authenticate("a@x.com", "second"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_unknown_email_and_missing_table() {
        let temp_dir = TempDir::new().unwrap();
        let auth = Authenticator::new(&StoreConfig::in_dir(temp_dir.path()));
        assert!(matches!(
            auth.authenticate("nobody@x.com", "pw"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_create_user_rejects_duplicate_without_writing() {
        let (_dir, auth) = authenticator("email,password\na@x.com,pw\n");
        let before = std::fs::read(auth.store().path()).unwrap();

        let err = auth.create_user("a@x.com", "other").unwrap_err();
        assert!(matches!(err, Error::UserAlreadyExists(ref e) if e == "a@x.com"));
        assert_eq!(std::fs::read(auth.store().path()).unwrap(), before);
    }

    #[test]
    fn test_created_user_is_hashed() {
        let temp_dir = TempDir::new().unwrap();
        let auth = Authenticator::new(&StoreConfig::in_dir(temp_dir.path()).with_bcrypt_cost(4));

        let resp = auth.create_user("new@x.com", "s3cret").unwrap();
        assert_eq!(resp.status, "created");
        assert_eq!(resp.message, "User new@x.com created successfully");

        let stored = auth.store().find_by_email("new@x.com").unwrap().unwrap();
        assert!(stored.credential.is_hashed());
        assert!(!std::fs::read_to_string(auth.store().path()).unwrap().contains("s3cret"));
    }
}
