//! User Accounts API - CRUD service for user accounts
//!
//! A layered REST API built with Axum and SeaORM: handlers validate the
//! request shape, use cases enforce the account rules, and a repository
//! persists users to Postgres (or SQLite in tests).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, value objects and the repository contract
//! - **services**: User use cases
//! - **infra**: Database, migrations, repository implementation, shutdown
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Email, Password, User};
pub use errors::{AppError, AppResult};
