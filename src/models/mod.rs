pub mod response;
pub mod usage;
pub mod user;

pub use response::{AuthResponse, ErrorBody, HealthReport, StatusResponse};
pub use usage::{UsageEvent, UsageSummary};
pub use user::{BCRYPT_MARKER, Credential, PublicUser, UserRecord};
