//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - The SeaORM-backed user repository
//! - Process shutdown signalling

pub mod db;
pub mod repositories;
pub mod shutdown;

pub use db::{Database, Migrator};
pub use repositories::UserStore;
pub use shutdown::shutdown_signal;
