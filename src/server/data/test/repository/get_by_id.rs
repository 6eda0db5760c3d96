use super::*;

/// Tests fetching an existing row by primary key.
///
/// Expected: Ok(Some(vessel))
#[tokio::test]
async fn returns_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vessel = factory::create_vessel(db).await?;

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    let found = repo.get_by_id(vessel.id).await?;

    assert_eq!(found, Some(vessel));

    Ok(())
}

/// Tests fetching an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<_, entity::vessel::Entity>::new(db);

    assert!(repo.get_by_id(404).await?.is_none());

    Ok(())
}

/// Tests string primary keys.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn supports_string_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = Repository::<_, entity::app_user::Entity>::new(db);
    let found = repo.get_by_id(user.id.clone()).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}
