//! # Usage Gate
//!
//! Credential verification and usage logging backed by two flat CSV tables.
//!
//! ## Overview
//!
//! - Authenticate an email/password pair against the credential table, accepting
//!   bcrypt `$2b$` hashes and, for legacy rows, plaintext passwords
//! - Append per-request usage events (question count, cost estimate)
//! - Fold the usage table into per-user totals on demand
//! - List and create users; rebuild the credential table from a roster export
//!
//! [`Backend`] bundles the boundary operations; each component can also be
//! built on its own from a [`StoreConfig`].
//!
//! ## Features
//!
//! - `colors` (default): Enables terminal color output via owo-colors

/// Credential verification, user listing and creation
pub mod auth;

/// Command-line argument parsing
pub mod cli;

/// Table locations and hashing cost
pub mod config;

/// Text and JSON output for the command-line front end
pub mod display;

/// Error taxonomy
pub mod error;

/// bcrypt hashing and verification
pub mod hash;

/// Records, events, summaries and response bodies
pub mod models;

/// Offline credential table preparation
pub mod provision;

/// Boundary operations facade
pub mod service;

/// Flat-file row stores
pub mod store;

/// Usage recording and aggregation
pub mod usage;

/// Timestamp and formatting helpers
pub mod utils;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use service::Backend;
