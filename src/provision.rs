//! # Provision Module
//!
//! Offline preparation of the credential table from a roster export with
//! `Email` and `Password` columns. The target table is rewritten from scratch
//! with bcrypt hashes; plaintext passwords never reach it.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::hash::hash_password;
use crate::store::{EMAIL_COLUMN, HASH_COLUMN};

const ROSTER_EMAIL: &str = "Email";
const ROSTER_PASSWORD: &str = "Password";

/// One usable roster row, values trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub email: String,
    pub password: String,
}

/// Read a roster, skipping rows whose email is blank.
pub fn read_roster(source: &Path) -> Result<Vec<RosterEntry>> {
    const READ: &str = "read roster";
    let file = File::open(source).map_err(|e| Error::persistence(READ, e))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers().map_err(|e| Error::persistence(READ, e))?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::persistence(READ, format!("no `{name}` column")))
    };
    let email_idx = column(ROSTER_EMAIL)?;
    let password_idx = column(ROSTER_PASSWORD)?;

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| Error::persistence(READ, e))?;
        let email = row.get(email_idx).unwrap_or("").trim();
        if email.is_empty() {
            continue;
        }
        entries.push(RosterEntry {
            email: email.to_string(),
            password: row.get(password_idx).unwrap_or("").trim().to_string(),
        });
    }
    Ok(entries)
}

/// Hash every roster entry into a fresh credential table at `target`.
///
/// Returns the number of users written.
pub fn provision(source: &Path, target: &Path, cost: u32) -> Result<usize> {
    const WRITE: &str = "write credential table";
    let entries = read_roster(source)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(target)
        .map_err(|e| Error::persistence(WRITE, e))?;
    writer
        .write_record([EMAIL_COLUMN, HASH_COLUMN])
        .map_err(|e| Error::persistence(WRITE, e))?;
    for entry in &entries {
        let hash = hash_password(&entry.password, cost)?;
        writer
            .write_record([entry.email.as_str(), hash.as_str()])
            .map_err(|e| Error::persistence(WRITE, e))?;
        info!(email = %entry.email, "hashed roster entry");
    }
    writer.flush().map_err(|e| Error::persistence(WRITE, e))?;
    Ok(entries.len())
}
