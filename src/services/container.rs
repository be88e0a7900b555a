//! Service Container - composition root for application services.
//!
//! Services are built once at process start and handed out as trait
//! objects, so handlers never see concrete repository types.

use std::sync::Arc;

use super::{UserManager, UserService};
use crate::config::Config;
use crate::domain::UserRepository;
use crate::infra::UserStore;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from an already-built user service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire services on top of an arbitrary repository implementation
    pub fn from_repository(repo: Arc<dyn UserRepository>, config: &Config) -> Self {
        let user_service = Arc::new(
            UserManager::new(repo)
                .with_disposable_domains(config.disposable_email_domains.clone()),
        );
        Self::new(user_service)
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        Self::from_repository(Arc::new(UserStore::new(db)), config)
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
