use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::repository::Repository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

pub enum Permission {
    Admin,
}

/// Resolves the caller of a request and checks their permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in account if it holds every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(Model)` - The caller's account
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session refers to a deleted account
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::app_user::Model, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let repo = Repository::<_, entity::app_user::Entity>::new(self.db);
        let Some(user) = repo.get_by_id(user_id.clone()).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        tracing::debug!("Authorized user {}", user.id);

        Ok(user)
    }
}
