//! SeaORM-backed implementation of the user repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Email, User, UserRepository};
use crate::errors::{AppError, AppResult};

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// The unique email index is the last line of defence against two
/// concurrent registrations passing the availability check.
fn map_unique_violation(err: DbErr, conflict: AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!("Unique constraint violated: {}", detail);
            conflict
        }
        _ => AppError::from(err),
    }
}

/// A row deleted between load and write reads as absent.
fn updated_or_absent(result: Result<user::Model, DbErr>) -> AppResult<Option<user::Model>> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(map_unique_violation(
            e,
            AppError::validation("Email already in use"),
        )),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .one(&self.db)
            .await?;

        result.map(User::try_from).transpose()
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(user.id().to_string()),
            name: Set(user.name().to_string()),
            email: Set(user.email().to_string()),
            password: Set(user.password().as_str().to_string()),
            created_at: Set(user.created_at()),
            updated_at: Set(user.updated_at()),
        };

        let model = active_model.insert(&self.db).await.map_err(|e| {
            map_unique_violation(e, AppError::business("User with this email already exists"))
        })?;
        User::try_from(model)
    }

    async fn update(&self, id: &str, user: &User) -> AppResult<Option<User>> {
        let Some(existing) = UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        active.name = Set(user.name().to_string());
        active.email = Set(user.email().to_string());
        active.password = Set(user.password().as_str().to_string());
        active.updated_at = Set(user.updated_at());

        updated_or_absent(active.update(&self.db).await)?
            .map(User::try_from)
            .transpose()
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = UserEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_updated_reads_as_absent() {
        let result = updated_or_absent(Err(DbErr::RecordNotUpdated));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_other_update_errors_propagate() {
        let result = updated_or_absent(Err(DbErr::Custom("connection reset".to_string())));
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
