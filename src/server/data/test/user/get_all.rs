use super::*;

/// Tests listing accounts alphabetically.
///
/// Expected: names in ascending order
#[tokio::test]
async fn lists_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_user_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        AppUserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let names: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|user| user.user_name)
        .collect();

    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}
