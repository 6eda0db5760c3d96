use super::*;

/// Tests finding an account by email regardless of the caller's casing.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_user_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = AppUserFactory::new(db)
        .email("agent@port.example")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email(" Agent@Port.Example ").await?;

    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AppUserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
