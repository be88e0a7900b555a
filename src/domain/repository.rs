//! Persistence contract for the user aggregate.

use async_trait::async_trait;

use super::{Email, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every stored user
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Find user by email address (exact match)
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// Insert a new user and return the stored state
    async fn create(&self, user: &User) -> AppResult<User>;

    /// Overwrite the mutable fields of `id` with those of `user`.
    ///
    /// Returns `None` when no row with `id` exists.
    async fn update(&self, id: &str, user: &User) -> AppResult<Option<User>>;

    /// Delete user by ID, returning whether a row was removed
    async fn delete(&self, id: &str) -> AppResult<bool>;
}
