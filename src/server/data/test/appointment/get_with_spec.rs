use super::*;

/// Tests fetching one appointment with its relations.
///
/// Expected: Ok(Some) with vessel and status-ordered tasks
#[tokio::test]
async fn returns_appointment_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (vessel, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    factory::task::create_task_with_status(db, appointment.id, 1).await?;
    factory::task::create_task_with_status(db, appointment.id, 0).await?;

    let repo = AppointmentRepository::new(db);
    let row = repo
        .get_with_spec(&appointment_with_vessel_specification(appointment.id))
        .await?
        .unwrap();

    assert_eq!(row.appointment, appointment);
    assert_eq!(row.vessel, Some(vessel));
    assert_eq!(
        row.tasks.iter().map(|t| t.status).collect::<Vec<_>>(),
        vec![0, 1]
    );

    Ok(())
}

/// Tests fetching an appointment that does not exist.
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

    let repo = AppointmentRepository::new(db);
    let row = repo
        .get_with_spec(&appointment_with_vessel_specification(42))
        .await?;

    assert!(row.is_none());

    Ok(())
}
