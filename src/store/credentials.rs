//! Credential table access.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::table::{append_row, is_blank_header, open_reader, read_header};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::{Credential, UserRecord};

pub const EMAIL_COLUMN: &str = "email";
pub const HASH_COLUMN: &str = "password_hash";
/// Column name used by tables written before hashing was introduced
pub const LEGACY_PASSWORD_COLUMN: &str = "password";

const READ: &str = "read credential table";
const WRITE: &str = "write credential table";

/// Reads and appends rows of the credential table.
///
/// Email uniqueness is not enforced here; callers check before appending.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self::at(&config.users_path)
    }

    pub fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// All records in file order. A missing table is an empty list.
    pub fn list(&self) -> Result<Vec<UserRecord>> {
        let Some(mut reader) = open_reader(&self.path, READ)? else {
            debug!(path = %self.path.display(), "credential table not found");
            return Ok(Vec::new());
        };
        let headers = reader.headers().map_err(|e| Error::persistence(READ, e))?.clone();
        if is_blank_header(&headers) {
            return Ok(Vec::new());
        }

        let column = |name: &str| headers.iter().position(|h| h == name);
        let email_idx = column(EMAIL_COLUMN).ok_or_else(|| {
            Error::persistence(READ, format!("no `{EMAIL_COLUMN}` column"))
        })?;
        let hash_idx = column(HASH_COLUMN);
        let legacy_idx = column(LEGACY_PASSWORD_COLUMN);

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| Error::persistence(READ, e))?;
            let Some(email) = row.get(email_idx) else {
                continue;
            };
            let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");
            let hash = cell(hash_idx);
            let stored = if hash.is_empty() { cell(legacy_idx) } else { hash };

            let attributes = headers
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != email_idx && Some(*i) != hash_idx && Some(*i) != legacy_idx)
                .map(|(i, name)| (name.to_string(), row.get(i).unwrap_or("").to_string()))
                .collect();

            records.push(UserRecord {
                email: email.to_string(),
                credential: Credential::from_stored(stored),
                attributes,
            });
        }
        debug!(path = %self.path.display(), count = records.len(), "read credential table");
        Ok(records)
    }

    /// First record whose email matches exactly (case-sensitive).
    pub fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self.list()?.into_iter().find(|r| r.email == email))
    }

    /// Add one record at the end, creating the table with the default header
    /// when absent. An existing header decides the column layout.
    pub fn append(&self, record: &UserRecord) -> Result<()> {
        let header = read_header(&self.path, WRITE)?
            .unwrap_or_else(|| vec![EMAIL_COLUMN.to_string(), HASH_COLUMN.to_string()]);

        let has_hash_column = header.iter().any(|h| h == HASH_COLUMN);
        if !has_hash_column && !header.iter().any(|h| h == LEGACY_PASSWORD_COLUMN) {
            return Err(Error::persistence(WRITE, "no password column"));
        }
        if !header.iter().any(|h| h == EMAIL_COLUMN) {
            return Err(Error::persistence(WRITE, format!("no `{EMAIL_COLUMN}` column")));
        }

        let row: Vec<String> = header
            .iter()
            .map(|name| match name.as_str() {
                EMAIL_COLUMN => record.email.clone(),
                HASH_COLUMN => record.credential.as_stored().to_string(),
                LEGACY_PASSWORD_COLUMN if !has_hash_column => {
                    record.credential.as_stored().to_string()
                }
                LEGACY_PASSWORD_COLUMN => String::new(),
                other => record.attribute(other).unwrap_or("").to_string(),
            })
            .collect();

        let header_refs: Vec<&str> = header.iter().map(String::as_str).collect();
        append_row(&self.path, &header_refs, &row, WRITE)?;
        debug!(path = %self.path.display(), email = %record.email, "appended credential row");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(content: &str) -> (TempDir, CredentialStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.csv");
        std::fs::write(&path, content).unwrap();
        let store = CredentialStore::at(&path);
        (temp_dir, store)
    }

    #[test]
    fn test_missing_table_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::at(&temp_dir.path().join("users.csv"));
        assert!(store.list().unwrap().is_empty());
        assert!(store.find_by_email("a@x.com").unwrap().is_none());
    }

    #[test]
    fn test_hash_column_preferred_over_legacy() {
        let (_dir, store) = store_with(
            "email,password_hash,password\n\
             a@x.com,$2b$04$abc,old\n\
             b@x.com,,plain\n",
        );
        let users = store.list().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].credential, Credential::Hashed("$2b$04$abc".into()));
        assert_eq!(users[1].credential, Credential::Plaintext("plain".into()));
        assert!(users[0].attributes.is_empty());
    }

    #[test]
    fn test_first_duplicate_wins_and_match_is_case_sensitive() {
        let (_dir, store) = store_with("email,password\na@x.com,first\na@x.com,second\n");
        let found = store.find_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(found.credential.as_stored(), "first");
        assert!(store.find_by_email("A@x.com").unwrap().is_none());
    }

    #[test]
    fn test_extra_columns_kept_as_attributes() {
        let (_dir, store) = store_with("email,team,password\na@x.com,ops,pw\n");
        let user = store.find_by_email("a@x.com").unwrap().unwrap();
        assert_eq!(user.attribute("team"), Some("ops"));
        assert_eq!(user.credential.as_stored(), "pw");
    }

    #[test]
    fn test_missing_email_column_is_persistence_error() {
        let (_dir, store) = store_with("user,password\nalice,pw\n");
        assert!(matches!(store.list(), Err(Error::Persistence(_))));
    }

    #[test]
    fn test_append_creates_table_with_hash_header() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::at(&temp_dir.path().join("users.csv"));
        store
            .append(&UserRecord::new("a@x.com", Credential::Hashed("$2b$04$xyz".into())))
            .unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("email,password_hash\r\n"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_append_to_blank_table_writes_header() {
        let (_dir, store) = store_with("\n");
        assert!(store.list().unwrap().is_empty());

        store
            .append(&UserRecord::new("a@x.com", Credential::Hashed("$2b$04$xyz".into())))
            .unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "email,password_hash\r\na@x.com,$2b$04$xyz\r\n");
        assert!(store.find_by_email("a@x.com").unwrap().is_some());
    }

    #[test]
    fn test_append_to_legacy_table_uses_password_column() {
        let (_dir, store) = store_with("email,password\nold@x.com,pw\n");
        store
            .append(&UserRecord::new("new@x.com", Credential::Hashed("$2b$04$xyz".into())))
            .unwrap();

        let user = store.find_by_email("new@x.com").unwrap().unwrap();
        assert_eq!(user.credential, Credential::Hashed("$2b$04$xyz".into()));
        assert_eq!(store.list().unwrap().len(), 2);
    }
}
