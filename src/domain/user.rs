//! User domain entity and its outward views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{Email, Password};

/// User domain entity
///
/// Fields are private so that every mutation goes through a method that
/// bumps `updated_at`.
#[derive(Debug, Clone)]
pub struct User {
    id: String,
    name: String,
    email: Email,
    password: Password,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Create a brand new user with a generated identifier.
    pub fn new(name: String, email: Email, password: Password) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, email, password)
    }

    /// Create a new user with a caller-supplied identifier.
    pub fn with_id(id: String, name: String, email: Email, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            password,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a user from persisted state.
    ///
    /// A stored `updated_at` earlier than `created_at` is clamped up to it.
    pub fn reconstitute(
        id: String,
        name: String,
        email: Email,
        password: Password,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Update user's name
    pub fn update_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Update user's email
    pub fn update_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    /// Replace the stored password hash
    pub fn update_password(&mut self, password: Password) {
        self.password = password;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// User creation request
///
/// Email format is checked by [`Email::parse`] in the use case, not here.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// User display name
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[schema(example = "John Doe", min_length = 2)]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (minimum 6 characters, must not contain the name)
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "S3cure!pass", min_length = 6)]
    pub password: String,
}

/// User update request; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[schema(example = "Jane Doe", min_length = 2)]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "N3w!secret", min_length = 6)]
    pub password: Option<String>,
}

/// Read view of a user (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.to_string(),
        }
    }
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// User returned after a create or update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "user@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_user() -> User {
        let created = Utc::now() - Duration::hours(1);
        User::reconstitute(
            "user-1".to_string(),
            "Alice".to_string(),
            Email::parse("alice@example.com").unwrap(),
            Password::from_hash("hash".to_string()),
            created,
            created,
        )
    }

    #[test]
    fn test_new_user_gets_generated_id_and_equal_timestamps() {
        let user = User::new(
            "Bob".to_string(),
            Email::parse("bob@example.com").unwrap(),
            Password::from_hash("hash".to_string()),
        );

        assert!(Uuid::parse_str(user.id()).is_ok());
        assert_eq!(user.created_at(), user.updated_at());
    }

    #[test]
    fn test_update_name_bumps_updated_at() {
        let mut user = sample_user();
        let before = user.updated_at();

        user.update_name("Alicia".to_string());

        assert_eq!(user.name(), "Alicia");
        assert_eq!(user.email().as_str(), "alice@example.com");
        assert!(user.updated_at() > before);
    }

    #[test]
    fn test_update_email_bumps_updated_at() {
        let mut user = sample_user();
        let before = user.updated_at();

        user.update_email(Email::parse("new@example.com").unwrap());

        assert_eq!(user.email().as_str(), "new@example.com");
        assert!(user.updated_at() > before);
    }

    #[test]
    fn test_reconstitute_keeps_updated_at_not_before_created_at() {
        let created = Utc::now();
        let user = User::reconstitute(
            "id".to_string(),
            "Name".to_string(),
            Email::parse("n@example.com").unwrap(),
            Password::from_hash("hash".to_string()),
            created,
            created - Duration::minutes(5),
        );
        assert!(user.updated_at() >= user.created_at());
    }

    #[test]
    fn test_views_omit_password() {
        let user = sample_user();

        let view = serde_json::to_value(UserView::from(&user)).unwrap();
        assert_eq!(view["id"], "user-1");
        assert_eq!(view["email"], "alice@example.com");
        assert!(view.get("password").is_none());

        let response = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert!(response.get("password").is_none());
        assert!(response.get("createdAt").is_some());
        assert!(response.get("updatedAt").is_some());
    }
}
