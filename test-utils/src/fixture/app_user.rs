//! User account fixtures.

use entity::app_user;

pub const DEFAULT_ID: &str = "00000000-0000-4000-8000-000000000001";
pub const DEFAULT_NAME: &str = "Test User";
pub const DEFAULT_EMAIL: &str = "user@example.com";

/// Placeholder hash; it is not a valid PHC string so no password verifies against it.
pub const DEFAULT_PASSWORD_HASH: &str = "unusable";

/// Creates a non-admin user model with default values.
pub fn entity() -> app_user::Model {
    app_user::Model {
        id: DEFAULT_ID.to_string(),
        user_name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        password_hash: DEFAULT_PASSWORD_HASH.to_string(),
        is_admin: false,
    }
}
