//! # Config Module
//!
//! Locations of the two tables and the hashing cost, resolved once at startup
//! and handed to each component when it is constructed.

use std::path::{Path, PathBuf};

pub const DEFAULT_USERS_FILE: &str = "users.csv";
pub const DEFAULT_USAGE_FILE: &str = "usage_log.csv";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Credential table (`email,password_hash`)
    pub users_path: PathBuf,
    /// Usage table (`timestamp,email,question_count,cost_estimate`)
    pub usage_path: PathBuf,
    /// bcrypt work factor for newly hashed passwords
    pub bcrypt_cost: u32,
}

impl StoreConfig {
    pub fn new(users_path: impl Into<PathBuf>, usage_path: impl Into<PathBuf>) -> Self {
        Self {
            users_path: users_path.into(),
            usage_path: usage_path.into(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Both tables placed under one directory with their default file names.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_USERS_FILE), dir.join(DEFAULT_USAGE_FILE))
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_FILE, DEFAULT_USAGE_FILE)
    }
}
