//! User account factory for creating test users.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The default password hash is unusable; pass a real hash through
/// `password_hash` when a test needs to log in.
///
/// # Example
///
/// ```rust,ignore
/// let admin = AppUserFactory::new(db).name("Admin").admin(true).build().await?;
/// ```
pub struct AppUserFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    id: String,
    name: String,
    email: String,
    password_hash: String,
    admin: bool,
}

impl<'a, C: ConnectionTrait> AppUserFactory<'a, C> {
    /// Creates a new factory with defaults: id `"user-{n}"`, name `"User {n}"`,
    /// email `"user{n}@example.com"`, not admin.
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: fixture::app_user::DEFAULT_PASSWORD_HASH.to_string(),
            admin: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::app_user::Model, DbErr> {
        entity::app_user::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            is_admin: ActiveValue::Set(self.admin),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin user with default values.
pub async fn create_user<C: ConnectionTrait>(db: &C) -> Result<entity::app_user::Model, DbErr> {
    AppUserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin<C: ConnectionTrait>(db: &C) -> Result<entity::app_user::Model, DbErr> {
    AppUserFactory::new(db).admin(true).build().await
}
