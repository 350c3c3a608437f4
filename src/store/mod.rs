//! # Store Module
//!
//! Flat-file row stores backing the service:
//!
//! - [`CredentialStore`]: `email,password_hash` rows (or legacy `email,password`)
//! - [`UsageLog`]: append-only `timestamp,email,question_count,cost_estimate` rows
//!
//! Both treat a missing or blank file as an empty table and write a header on
//! first append. Nothing here serializes concurrent writers.

mod credentials;
mod table;
mod usage_log;

pub use credentials::{CredentialStore, EMAIL_COLUMN, HASH_COLUMN, LEGACY_PASSWORD_COLUMN};
pub use usage_log::{USAGE_HEADER, UsageLog};
