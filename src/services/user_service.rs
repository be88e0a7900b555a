//! User service - the account use cases.
//!
//! Each operation is a linear validate -> mutate -> persist pipeline that
//! returns on the first failed precondition, before any write.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{DEFAULT_DISPOSABLE_EMAIL_DOMAINS, MIN_NAME_LENGTH};
use crate::domain::{CreateUser, Email, Password, UpdateUser, User, UserRepository, UserView};
use crate::errors::{AppError, AppResult, OptionExt};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new account
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Get a single user view by ID
    async fn get_user(&self, id: &str) -> AppResult<UserView>;

    /// List all users as views
    async fn list_users(&self) -> AppResult<Vec<UserView>>;

    /// Apply the present fields of `input` to an existing user
    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User>;

    /// Delete a user by ID
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    disposable_domains: Vec<String>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
            disposable_domains: DEFAULT_DISPOSABLE_EMAIL_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }

    /// Replace the list of rejected email domain suffixes
    pub fn with_disposable_domains(mut self, domains: Vec<String>) -> Self {
        self.disposable_domains = domains;
        self
    }

    async fn ensure_email_available(&self, email: &Email) -> AppResult<()> {
        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AppError::business("User with this email already exists"));
        }
        Ok(())
    }

    fn ensure_not_disposable(&self, email: &Email) -> AppResult<()> {
        if self
            .disposable_domains
            .iter()
            .any(|domain| email.ends_with(domain))
        {
            return Err(AppError::business(
                "Temporary email providers are not allowed",
            ));
        }
        Ok(())
    }

    async fn find_existing(&self, id: &str) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found("User not found")
    }
}

/// Reject blank identifiers
fn validate_id(id: &str) -> AppResult<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::validation("Invalid user ID"));
    }
    Ok(id)
}

/// Names are stored trimmed, so the length bound applies after trimming
fn ensure_name_length(name: &str) -> AppResult<()> {
    if (name.chars().count() as u64) < MIN_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Name must be at least {} characters",
            MIN_NAME_LENGTH
        )));
    }
    Ok(())
}

fn ensure_password_excludes_name(password: &str, name: &str) -> AppResult<()> {
    if password.contains(name) {
        return Err(AppError::business("Password cannot contain user name"));
    }
    Ok(())
}

/// Treat empty strings in partial updates as absent
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let email = Email::parse(&input.email)?;
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        ensure_name_length(&name)?;

        self.ensure_email_available(&email).await?;
        ensure_password_excludes_name(&input.password, &name)?;
        self.ensure_not_disposable(&email)?;

        let password = Password::new(&input.password)?;
        let user = self.repo.create(&User::new(name, email, password)).await?;

        tracing::info!(user_id = %user.id(), "User created");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> AppResult<UserView> {
        let id = validate_id(id)?;
        let user = self.find_existing(id).await?;
        Ok(UserView::from(&user))
    }

    async fn list_users(&self) -> AppResult<Vec<UserView>> {
        let users = self.repo.find_all().await?;
        Ok(users.iter().map(UserView::from).collect())
    }

    async fn update_user(&self, id: &str, input: UpdateUser) -> AppResult<User> {
        let id = validate_id(id)?;
        let mut user = self.find_existing(id).await?;

        if let Some(raw) = present(input.email) {
            let email = Email::parse(&raw)?;
            if let Some(owner) = self.repo.find_by_email(&email).await? {
                if owner.id() != id {
                    return Err(AppError::validation("Email already in use"));
                }
            }
            user.update_email(email);
        }

        if let Some(name) = present(input.name) {
            let name = name.trim().to_string();
            ensure_name_length(&name)?;
            user.update_name(name);
        }

        if let Some(plain) = present(input.password) {
            ensure_password_excludes_name(&plain, user.name())?;
            user.update_password(Password::new(&plain)?);
        }

        let updated = self
            .repo
            .update(id, &user)
            .await?
            .ok_or_not_found("Failed to update user")?;

        tracing::info!(user_id = %id, "User updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        let id = validate_id(id)?;
        self.find_existing(id).await?;

        if !self.repo.delete(id).await? {
            return Err(AppError::not_found("Failed to delete user"));
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
