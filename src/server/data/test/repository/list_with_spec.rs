use super::*;
use test_utils::factory::{task::TaskFactory, vessel::VesselFactory};

/// Tests that a match-all specification returns every row.
///
/// Expected: Ok with all vessels
#[tokio::test]
async fn match_all_returns_every_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_vessel(db).await?;
    }

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    let vessels = repo.list_with_spec(&Specification::new()).await?;

    assert_eq!(vessels.len(), 3);
    assert_eq!(vessels.len(), repo.list().await?.len());

    Ok(())
}

/// Tests that the vessel search ignores case on both sides.
///
/// Expected: "Titanic" and "titanic" select the same rows
#[tokio::test]
async fn vessel_search_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VesselFactory::new(db).name("RMS TITANIC").build().await?;
    VesselFactory::new(db).name("Titanic II").build().await?;
    VesselFactory::new(db).name("Olympic").build().await?;

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    let upper = repo
        .list_with_spec(&vessels_specification(&VesselsSpecificationParams::new(
            "Titanic",
        )))
        .await?;
    let lower = repo
        .list_with_spec(&vessels_specification(&VesselsSpecificationParams::new(
            "titanic",
        )))
        .await?;

    assert_eq!(upper.len(), 2);
    assert_eq!(upper, lower);
    // Ordered by name
    assert_eq!(upper[0].name, "RMS TITANIC");
    assert_eq!(upper[1].name, "Titanic II");

    Ok(())
}

/// Tests that the vessel search folds non-ASCII capitals as well.
///
/// Expected: "ålesund" and "ÅLESUND" both find the vessel named "ÅLESUND STAR"
#[tokio::test]
async fn vessel_search_folds_unicode_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VesselFactory::new(db).name("ÅLESUND STAR").build().await?;
    VesselFactory::new(db).name("Bergen Star").build().await?;

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    for term in ["ålesund", "ÅLESUND", "Ålesund Star"] {
        let found = repo
            .list_with_spec(&vessels_specification(&VesselsSpecificationParams::new(
                term,
            )))
            .await?;

        assert_eq!(found.len(), 1, "term {}", term);
        assert_eq!(found[0].name, "ÅLESUND STAR");
        assert_eq!(found[0].name_search, "ålesund star");
    }

    Ok(())
}

/// Tests that wildcard characters in the search term match literally.
///
/// Expected: only the vessel whose name contains "50%"
#[tokio::test]
async fn vessel_search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    VesselFactory::new(db).name("Bulk 50% Carrier").build().await?;
    VesselFactory::new(db).name("Bulk 500 Carrier").build().await?;

    let repo = Repository::<_, entity::vessel::Entity>::new(db);
    let found = repo
        .list_with_spec(&vessels_specification(&VesselsSpecificationParams::new(
            "50%",
        )))
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Bulk 50% Carrier");

    Ok(())
}

/// Tests paging of tasks ordered by status then deadline.
///
/// Creates five tasks with statuses out of order and reads them two at a time.
///
/// Expected: pages follow the status order and the last page holds the remainder
#[tokio::test]
async fn pages_tasks_in_status_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    for status in [3, 0, 2, 1, 0] {
        TaskFactory::new(db, appointment.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = Repository::<_, entity::task::Entity>::new(db);
    let mut statuses = Vec::new();
    for page_index in 1..=3 {
        let params = TasksSpecificationParams {
            appointment_id: Some(appointment.id),
            page_index,
            page_size: PageSize::new(2),
        };
        let page = repo
            .list_with_spec(&tasks_with_pagination_specification(&params))
            .await?;
        statuses.push(page.iter().map(|t| t.status).collect::<Vec<_>>());
    }

    assert_eq!(statuses, vec![vec![0, 0], vec![1, 2], vec![3]]);

    Ok(())
}

/// Tests that the task filter only returns tasks of the requested appointment.
///
/// Expected: Ok with the single matching task
#[tokio::test]
async fn filters_tasks_by_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first, task) = factory::helpers::create_task_with_dependencies(db).await?;
    let (_, _, _) = factory::helpers::create_task_with_dependencies(db).await?;

    let params = TasksSpecificationParams {
        appointment_id: Some(first.id),
        ..Default::default()
    };

    let repo = Repository::<_, entity::task::Entity>::new(db);
    let tasks = repo
        .list_with_spec(&tasks_with_pagination_specification(&params))
        .await?;

    assert_eq!(tasks, vec![task]);

    Ok(())
}
