use serde::ser::{Serialize, SerializeMap, Serializer};

/// Prefix of a bcrypt hash in the `$2b$` revision.
pub const BCRYPT_MARKER: &str = "$2b$";

/// Stored secret for a user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// bcrypt hash, checked with verify
    Hashed(String),
    /// Legacy plaintext password. Only ever read from old tables, never written
    /// for new users.
    Plaintext(String),
}

impl Credential {
    /// Classify a raw value from the credential column.
    pub fn from_stored(value: &str) -> Self {
        if value.starts_with(BCRYPT_MARKER) {
            Self::Hashed(value.to_string())
        } else {
            Self::Plaintext(value.to_string())
        }
    }

    /// Raw value as it appears in the table.
    pub fn as_stored(&self) -> &str {
        match self {
            Self::Hashed(h) => h,
            Self::Plaintext(p) => p,
        }
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub email: String,
    pub credential: Credential,
    /// Extra columns of the credential table, in column order.
    pub attributes: Vec<(String, String)>,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, credential: Credential) -> Self {
        Self {
            email: email.into(),
            credential,
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Copy of the record that is safe to hand out (no credential).
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            email: self.email.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

/// User as returned by listings: email plus any extra columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicUser {
    pub email: String,
    pub attributes: Vec<(String, String)>,
}

// Serialized as a flat object so extra columns sit next to `email`, in table order.
impl Serialize for PublicUser {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.attributes.len()))?;
        map.serialize_entry("email", &self.email)?;
        for (k, v) in &self.attributes {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_classification() {
        let hashed = Credential::from_stored("$2b$12$abcdefghijklmnopqrstuv");
        assert!(hashed.is_hashed());

        // Other bcrypt revisions are not recognised
        assert!(!Credential::from_stored("$2a$12$abcdefghijklmnopqrstuv").is_hashed());
        assert_eq!(
            Credential::from_stored("Windmill2025"),
            Credential::Plaintext("Windmill2025".into())
        );
        assert_eq!(Credential::from_stored("").as_stored(), "");
    }

    #[test]
    fn test_public_user_json_has_no_credential() {
        let mut rec = UserRecord::new("a@x.com", Credential::Plaintext("secret".into()));
        rec.attributes.push(("team".into(), "ops".into()));
        let json = serde_json::to_value(rec.to_public()).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@x.com", "team": "ops"}));
        assert!(!json.to_string().contains("secret"));
    }
}
