//! User account queries.

use entity::app_user;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Account lookups that go beyond the generic repository.
///
/// Writes go through a unit of work like every other entity.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the account registered under `email`, compared case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<app_user::Model>, DbErr> {
        app_user::Entity::find()
            .filter(app_user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await
    }

    /// Whether any account holds the admin flag.
    ///
    /// Used at startup to decide whether the configured admin account must be seeded.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = app_user::Entity::find()
            .filter(app_user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Every account, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<app_user::Model>, DbErr> {
        app_user::Entity::find()
            .order_by_asc(app_user::Column::UserName)
            .order_by_asc(app_user::Column::Id)
            .all(self.db)
            .await
    }
}
