//! User account models.

use serde::{Deserialize, Serialize};

/// A registered user. Every other record is owned by exactly one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Opaque owner ID referenced by all owned records
    pub user_id: String,
    /// Display name
    pub username: String,
    /// Login email (unique)
    pub email: String,
    /// Argon2id PHC string, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Postal address
    pub address: String,
    /// Contact phone (11 digits)
    pub phone: Option<String>,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

impl User {
    /// Create a new user with an already-hashed password.
    pub fn new(username: String, email: String, password_hash: String, address: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            address,
            phone: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Registration form as submitted by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub address: String,
    pub phone: Option<String>,
}

/// Editable subset of a user's details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserDetailsUpdate {
    pub username: String,
    pub email: String,
    pub address: String,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(
            "Ann Smith".into(),
            "ann@example.com".into(),
            "$argon2id$stub".into(),
            "1 High Street".into(),
        );
        assert_eq!(user.user_id.len(), 36); // UUID format
        assert!(user.phone.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new(
            "Ann Smith".into(),
            "ann@example.com".into(),
            "$argon2id$secret".into(),
            "1 High Street".into(),
        );
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret"));
    }
}
