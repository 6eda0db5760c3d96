use super::*;
use crate::server::{
    model::{
        enums::EnumCode,
        params::{PageSize, TasksSpecificationParams},
        task::TaskParams,
    },
    service::task::TaskService,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests the pagination metadata of a task page.
///
/// Creates seven tasks and requests the second page of three.
///
/// Expected: three tasks with total_items of seven
#[tokio::test]
async fn paginates_with_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    for _ in 0..7 {
        factory::create_task(db, appointment.id).await?;
    }

    let params = TasksSpecificationParams {
        appointment_id: Some(appointment.id),
        page_index: 2,
        page_size: PageSize::new(3),
    };
    let page = TaskService::new(db).get_paginated(&params).await?;

    assert_eq!(page.page_index, 2);
    assert_eq!(page.page_size, 3);
    assert_eq!(page.total_items, 7);
    assert_eq!(page.tasks.len(), 3);

    Ok(())
}

/// Tests requesting a page past the last task.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn empty_page_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_task_with_dependencies(db).await?;

    let params = TasksSpecificationParams {
        page_index: 5,
        ..Default::default()
    };
    let result = TaskService::new(db).get_paginated(&params).await;

    assert!(is_not_found(&result));

    Ok(())
}

/// Tests requesting a page whose offset exceeds any possible row count.
///
/// Expected: Err(NotFound) rather than an overflow
#[tokio::test]
async fn far_away_page_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_task_with_dependencies(db).await?;

    let params = TasksSpecificationParams {
        page_index: i64::MAX as u64,
        page_size: PageSize::new(50),
        ..Default::default()
    };
    let result = TaskService::new(db).get_paginated(&params).await;

    assert!(is_not_found(&result));

    Ok(())
}

/// Tests creating a task.
///
/// Expected: Ok with the task stored on the appointment
#[tokio::test]
async fn creates_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;

    let service = TaskService::new(db);
    let task = service
        .create(TaskParams::from_dto(task_dto(appointment.id))?)
        .await?;

    assert_eq!(task.appointment_id, appointment.id);
    assert_eq!(service.get_by_id(task.id).await?, Some(task));

    Ok(())
}

/// Tests creating a task for an appointment that doesn't exist.
///
/// Expected: Err(NotFound) and no row written
#[tokio::test]
async fn create_requires_existing_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TaskService::new(db)
        .create(TaskParams::from_dto(task_dto(12))?)
        .await;

    assert!(is_not_found(&result));
    assert_eq!(entity::task::Entity::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating and deleting a task.
///
/// Expected: status changed, then the task removed
#[tokio::test]
async fn updates_and_deletes_task() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment, task) = factory::helpers::create_task_with_dependencies(db).await?;

    let mut dto = task_dto(appointment.id);
    dto.status = 2;

    let service = TaskService::new(db);
    let updated = service
        .update(task.id, TaskParams::from_dto(dto)?)
        .await?
        .unwrap();

    assert_eq!(updated.status.code(), 2);
    assert!(service.delete(task.id).await?);
    assert!(service.get_by_id(task.id).await?.is_none());

    Ok(())
}
