//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Email, Password, User};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fails only if a row holds an email the domain would reject.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let email = Email::parse(&model.email).map_err(|_| {
            AppError::internal(format!("Stored email for user {} is malformed", model.id))
        })?;

        Ok(User::reconstitute(
            model.id,
            model.name,
            email,
            Password::from_hash(model.password),
            model.created_at,
            model.updated_at,
        ))
    }
}
