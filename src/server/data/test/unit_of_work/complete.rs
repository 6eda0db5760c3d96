use super::*;

fn new_vessel(name: &str) -> entity::vessel::ActiveModel {
    let mut vessel = fixture::vessel::entity().into_active_model().reset_all();
    vessel.id = ActiveValue::NotSet;
    vessel.name = ActiveValue::Set(name.to_string());
    vessel.name_search = ActiveValue::Set(entity::vessel::name_search_key(name));
    vessel
}

/// Tests committing writes made through repositories of different entities.
///
/// Expected: Ok(2) and both rows visible afterwards
#[tokio::test]
async fn commits_changes_across_repositories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::begin(db).await?;
    let vessel = uow
        .repository::<entity::vessel::Entity>()
        .add(new_vessel("Atlantic Star"))
        .await?;

    let mut appointment = fixture::appointment::entity(vessel.id)
        .into_active_model()
        .reset_all();
    appointment.id = ActiveValue::NotSet;
    uow.repository::<entity::appointment::Entity>()
        .add(appointment)
        .await?;

    assert_eq!(uow.pending_changes(), 2);
    assert_eq!(uow.complete().await?, 2);

    assert_eq!(entity::vessel::Entity::find().count(db).await?, 1);
    assert_eq!(entity::appointment::Entity::find().count(db).await?, 1);

    Ok(())
}

/// Tests completing a unit of work that wrote nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_when_nothing_changed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uow = UnitOfWork::begin(db).await?;
    let vessels = uow.repository::<entity::vessel::Entity>().list().await?;

    assert!(vessels.is_empty());
    assert_eq!(uow.complete().await?, 0);

    Ok(())
}

/// Tests that dropping an uncompleted unit of work discards its writes.
///
/// Expected: no vessel persisted
#[tokio::test]
async fn rolls_back_when_dropped() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    {
        let uow = UnitOfWork::begin(db).await?;
        uow.repository::<entity::vessel::Entity>()
            .add(new_vessel("Never Saved"))
            .await?;
    }

    assert_eq!(entity::vessel::Entity::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a failed write inside the unit of work leaves earlier writes uncommitted.
///
/// Adds a vessel, then an appointment pointing at a vessel that does not exist.
///
/// Expected: foreign key error and no vessel persisted
#[tokio::test]
async fn failed_write_leaves_no_partial_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result: Result<u64, DbErr> = async {
        let uow = UnitOfWork::begin(db).await?;
        uow.repository::<entity::vessel::Entity>()
            .add(new_vessel("Half Written"))
            .await?;

        let mut orphan = fixture::appointment::entity(9_999)
            .into_active_model()
            .reset_all();
        orphan.id = ActiveValue::NotSet;
        uow.repository::<entity::appointment::Entity>()
            .add(orphan)
            .await?;

        uow.complete().await
    }
    .await;

    assert!(result.is_err());
    assert_eq!(entity::vessel::Entity::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting through a unit of work.
///
/// Expected: Ok(1) and the vessel with its appointment removed
#[tokio::test]
async fn commits_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (vessel, _) = factory::helpers::create_appointment_with_dependencies(db).await?;

    let uow = UnitOfWork::begin(db).await?;
    uow.repository::<entity::vessel::Entity>()
        .delete(vessel)
        .await?;

    assert_eq!(uow.complete().await?, 1);
    assert_eq!(entity::appointment::Entity::find().count(db).await?, 0);

    Ok(())
}
