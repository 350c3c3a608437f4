//! JSON bodies returned by the boundary operations

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResponse {
    pub email: String,
    pub status: String,
    pub message: String,
}

impl AuthResponse {
    pub fn authenticated(email: &str) -> Self {
        Self {
            email: email.to_string(),
            status: "authenticated".to_string(),
            message: "Login successful".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn logged() -> Self {
        Self {
            status: "logged".to_string(),
            message: "Usage logged successfully".to_string(),
        }
    }

    pub fn created(email: &str) -> Self {
        Self {
            status: "created".to_string(),
            message: format!("User {email} created successfully"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
}

/// Failure body, `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl From<&crate::Error> for ErrorBody {
    fn from(err: &crate::Error) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}
