//! Application state - handed to every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// User use cases
    pub user_service: Arc<dyn UserService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database and config.
    ///
    /// This is the composition root used by `serve`.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            user_service: container.users(),
            database,
        }
    }
}
