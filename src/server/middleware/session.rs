//! Typed access to the authentication data kept in the session.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication state of a session: the id of the logged-in account.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the account id, establishing a logged-in session.
    ///
    /// The session id is cycled first so an id issued before login can't be reused.
    pub async fn set_user_id(&self, user_id: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Account id of the logged-in user, if any.
    pub async fn get_user_id(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_USER_ID).await?)
    }

    /// Persists the session and returns its id, which doubles as the login token.
    pub async fn token(&self) -> Result<Option<String>, AppError> {
        self.session.save().await?;
        Ok(self.session.id().map(|id| id.to_string()))
    }

    /// Removes every value from the session and deletes it from the store.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
