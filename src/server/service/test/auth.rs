use super::*;
use crate::server::{
    error::auth::AuthError, service::auth::AuthService, util::password::hash_password,
};
use test_utils::{builder::TestBuilder, factory::app_user::AppUserFactory};

/// Tests logging in with correct credentials.
///
/// Expected: Ok(user)
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AppUserFactory::new(db)
        .email("master@port.example")
        .password_hash(hash_password("anchor")?)
        .build()
        .await?;

    let logged_in = AuthService::new(db)
        .login("master@port.example", "anchor")
        .await?;

    assert_eq!(logged_in, user);

    Ok(())
}

/// Tests a wrong password and an unknown email.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AppUserFactory::new(db)
        .email("master@port.example")
        .password_hash(hash_password("anchor")?)
        .build()
        .await?;

    let service = AuthService::new(db);

    assert!(matches!(
        service.login("master@port.example", "rudder").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("ghost@port.example", "anchor").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
