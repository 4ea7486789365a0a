//! This file defines a user of the application and its supporting types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PasswordHash;

/// A newtype wrapper for string user IDs.
/// This helps disambiguate user IDs from other types of IDs, leading to better
/// compile time errors when an ID of the wrong kind is passed around.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an existing ID string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A user of the application.
///
/// Users are created at sign-up and never mutated afterwards. The persisted
/// JSON field names match the original on-device records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    business_type: String,
    #[serde(rename = "photoURL")]
    photo_url: Option<String>,
    pub(crate) password_hash: Option<PasswordHash>,
}

/// The business-type label assigned to users that do not choose one.
pub(crate) const DEFAULT_BUSINESS_TYPE: &str = "ФОП, 3 група";

impl User {
    /// Create a new user record with a fresh ID.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        business_type: impl Into<String>,
        password_hash: Option<PasswordHash>,
    ) -> Self {
        Self {
            id: UserId::random(),
            name: name.into(),
            email: email.into(),
            business_type: business_type.into(),
            photo_url: None,
            password_hash,
        }
    }

    /// Create the fixed record produced by the simulated external sign-in
    /// provider: known ID, photo reference and no password hash.
    pub(crate) fn provider(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            business_type: DEFAULT_BUSINESS_TYPE.to_owned(),
            photo_url: Some(photo_url.into()),
            password_hash: None,
        }
    }

    /// The user's ID.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// The user's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The email address associated with the user.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The business-type label chosen at sign-up.
    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    /// An optional reference to the user's photo.
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    /// The user's password hash, absent for legacy records.
    pub fn password_hash(&self) -> Option<&PasswordHash> {
        self.password_hash.as_ref()
    }

    /// Whether `email` refers to this user. Emails compare
    /// case-insensitively.
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

#[cfg(test)]
mod user_tests {
    use super::{DEFAULT_BUSINESS_TYPE, User};
    use crate::models::PasswordHash;

    #[test]
    fn email_matches_ignores_case() {
        let user = User::new("Alice", "alice@x.com", DEFAULT_BUSINESS_TYPE, None);

        assert!(user.email_matches("Alice@X.com"));
        assert!(!user.email_matches("bob@x.com"));
    }

    #[test]
    fn new_users_get_unique_ids() {
        let first = User::new("Alice", "alice@x.com", DEFAULT_BUSINESS_TYPE, None);
        let second = User::new("Alice", "alice@x.com", DEFAULT_BUSINESS_TYPE, None);

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn serialization_round_trip_preserves_fields() {
        let user = User::new(
            "Alice",
            "alice@x.com",
            DEFAULT_BUSINESS_TYPE,
            Some(PasswordHash::new("secret1")),
        );

        let encoded = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&encoded).unwrap();

        assert_eq!(user, decoded);
    }
}
