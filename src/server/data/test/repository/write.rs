use super::*;

/// Tests inserting a row through `add`.
///
/// Expected: Ok with a generated id and the row persisted
#[tokio::test]
async fn adds_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    let created = repo
        .add(entity::vessel::ActiveModel {
            name: ActiveValue::Set("Ever Given".to_string()),
            name_search: ActiveValue::Set("ever given".to_string()),
            imo: ActiveValue::Set("9811000".to_string()),
            flag: ActiveValue::Set("Panama".to_string()),
            deadweight: ActiveValue::Set(199_629.0),
            length_overall: ActiveValue::Set(399.94),
            beam: ActiveValue::Set(58.8),
            depth: ActiveValue::Set(32.9),
            ..Default::default()
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(repo.get_by_id(created.id).await?, Some(created));

    Ok(())
}

/// Tests updating a row through `update`.
///
/// Expected: Ok with the changed column persisted
#[tokio::test]
async fn updates_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vessel = factory::create_vessel(db).await?;

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    let mut active = vessel.into_active_model();
    active.name = ActiveValue::Set("Renamed".to_string());
    let updated = repo.update(active).await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(
        entity::vessel::Entity::find_by_id(updated.id)
            .one(db)
            .await?
            .map(|v| v.name),
        Some("Renamed".to_string())
    );

    Ok(())
}

/// Tests that deleting an appointment cascades to its tasks.
///
/// Expected: one row reported, all tasks of the appointment gone
#[tokio::test]
async fn delete_cascades_to_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    for _ in 0..3 {
        factory::create_task(db, appointment.id).await?;
    }
    let (_, _, survivor) = factory::helpers::create_task_with_dependencies(db).await?;

    let repo = Repository::<_, entity::appointment::Entity>::new(db);
    let deleted = repo.delete(appointment).await?;

    let remaining = entity::task::Entity::find().all(db).await?;

    assert_eq!(deleted, 1);
    assert_eq!(remaining, vec![survivor]);

    Ok(())
}
