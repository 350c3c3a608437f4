//! Error taxonomy shared by every component.

/// Failure of a boundary operation.
///
/// All variants are terminal for the operation that raised them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No matching record, or the password did not verify.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A create was attempted for an email already present in the table.
    #[error("User already exists")]
    UserAlreadyExists(String),

    /// A table could not be read or written.
    #[error("{0}")]
    Persistence(String),
}

impl Error {
    /// Wrap a storage-level failure with what was being attempted.
    pub fn persistence<E: std::fmt::Display>(action: &str, err: E) -> Self {
        Self::Persistence(format!("Failed to {action}: {err}"))
    }

    /// Process exit code used by the command-line front end.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Persistence(_) => 1,
            Self::InvalidCredentials => 2,
            Self::UserAlreadyExists(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
