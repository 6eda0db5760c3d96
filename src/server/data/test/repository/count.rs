use super::*;
use test_utils::factory::vessel::VesselFactory;

/// Tests that the count agrees with the unpaged listing for the same filter.
///
/// Expected: count equals the number of tasks of the appointment, not the page size
#[tokio::test]
async fn count_matches_unpaged_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    for _ in 0..5 {
        factory::create_task(db, appointment.id).await?;
    }
    factory::helpers::create_task_with_dependencies(db).await?;

    let params = TasksSpecificationParams {
        appointment_id: Some(appointment.id),
        page_index: 1,
        page_size: PageSize::new(2),
    };
    let spec = tasks_with_pagination_specification(&params);

    let repo = Repository::<_, entity::task::Entity>::new(db);
    let page = repo.list_with_spec(&spec).await?;
    let total = repo.count(&spec.for_count()).await?;
    let unpaged = repo
        .list_with_spec(&Specification::new().with_criteria(spec.criteria().cloned()))
        .await?;

    assert_eq!(page.len(), 2);
    assert_eq!(total, 5);
    assert_eq!(total, unpaged.len() as u64);

    Ok(())
}

/// Tests counting with the vessel search criteria.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_vessel_search() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VesselFactory::new(db).name("Maersk Alabama").build().await?;
    VesselFactory::new(db).name("Ever Given").build().await?;

    let spec = vessels_specification(&VesselsSpecificationParams::new("ALABAMA"));
    let repo = Repository::<_, entity::vessel::Entity>::new(db);

    assert_eq!(repo.count(&spec.for_count()).await?, 1);

    Ok(())
}
