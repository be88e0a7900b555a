//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: Entities, Value Objects, the repository contract.

pub mod email;
pub mod password;
pub mod repository;
pub mod user;

pub use email::Email;
pub use password::Password;
pub use repository::UserRepository;
pub use user::{CreateUser, UpdateUser, User, UserResponse, UserView};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
