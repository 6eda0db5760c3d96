use super::*;

/// Tests that appointments come back ordered by ETA, then ETB, then status.
///
/// Expected: rows sorted by the three keys regardless of insertion order
#[tokio::test]
async fn orders_by_eta_then_etb_then_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vessel = factory::create_vessel(db).await?;
    let base = fixture::appointment::base_time();

    let late = AppointmentFactory::new(db, vessel.id)
        .estimated_time_of_arrival(base + Duration::days(2))
        .build()
        .await?;
    let same_eta_later_etb = AppointmentFactory::new(db, vessel.id)
        .estimated_time_of_arrival(base)
        .estimated_time_of_berthing(base + Duration::days(3))
        .build()
        .await?;
    let same_eta_higher_status = AppointmentFactory::new(db, vessel.id)
        .estimated_time_of_arrival(base)
        .status(2)
        .build()
        .await?;
    let first = AppointmentFactory::new(db, vessel.id)
        .estimated_time_of_arrival(base)
        .status(0)
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let ids: Vec<i32> = repo
        .list_with_spec(&appointments_specification(
            &AppointmentsSpecificationParams::default(),
        ))
        .await?
        .into_iter()
        .map(|row| row.appointment.id)
        .collect();

    assert_eq!(
        ids,
        vec![
            first.id,
            same_eta_higher_status.id,
            same_eta_later_etb.id,
            late.id
        ]
    );

    Ok(())
}

/// Tests that the vessel and tasks are loaded for every appointment.
///
/// Expected: vessel present, tasks of each appointment attached to it only
#[tokio::test]
async fn loads_vessel_and_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (vessel, first, first_task) = factory::helpers::create_task_with_dependencies(db).await?;
    let second = factory::create_appointment(db, vessel.id).await?;

    let repo = AppointmentRepository::new(db);
    let rows = repo
        .list_with_spec(&appointments_specification(
            &AppointmentsSpecificationParams::default(),
        ))
        .await?;

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.vessel.as_ref(), Some(&vessel));
        if row.appointment.id == first.id {
            assert_eq!(row.tasks, vec![first_task.clone()]);
        } else {
            assert_eq!(row.appointment.id, second.id);
            assert!(row.tasks.is_empty());
        }
    }

    Ok(())
}

/// Tests that tasks are ordered by status regardless of insertion order.
///
/// Expected: task statuses ascending
#[tokio::test]
async fn tasks_are_ordered_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, appointment) = factory::helpers::create_appointment_with_dependencies(db).await?;
    for status in [2, 0, 3, 1] {
        factory::task::create_task_with_status(db, appointment.id, status).await?;
    }

    let repo = AppointmentRepository::new(db);
    let rows = repo
        .list_with_spec(&appointments_specification(
            &AppointmentsSpecificationParams::default(),
        ))
        .await?;

    let statuses: Vec<i32> = rows[0].tasks.iter().map(|t| t.status).collect();
    assert_eq!(statuses, vec![0, 1, 2, 3]);

    Ok(())
}

/// Tests the conjunctive filters.
///
/// Expected: only the appointment matching vessel, port and done status
#[tokio::test]
async fn applies_all_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vessel = factory::create_vessel(db).await?;
    let other_vessel = factory::create_vessel(db).await?;

    let matching = AppointmentFactory::new(db, vessel.id)
        .port(3)
        .status(2)
        .build()
        .await?;
    AppointmentFactory::new(db, vessel.id)
        .port(3)
        .status(0)
        .build()
        .await?;
    AppointmentFactory::new(db, vessel.id)
        .port(1)
        .status(2)
        .build()
        .await?;
    AppointmentFactory::new(db, other_vessel.id)
        .port(3)
        .status(2)
        .build()
        .await?;

    let params = AppointmentsSpecificationParams {
        vessel_id: Some(vessel.id),
        port: Some(3),
        done: true,
        ..Default::default()
    };

    let repo = AppointmentRepository::new(db);
    let rows = repo.list_with_spec(&appointments_specification(&params)).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].appointment, matching);

    Ok(())
}

/// Tests filtering by a port code outside the known set.
///
/// Expected: Ok with no rows, not an error
#[tokio::test]
async fn unknown_port_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_appointment_with_dependencies(db).await?;

    let params = AppointmentsSpecificationParams {
        port: Some(7),
        ..Default::default()
    };

    let repo = AppointmentRepository::new(db);
    let rows = repo.list_with_spec(&appointments_specification(&params)).await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests hydrating more appointments than fit in one `IN` batch.
///
/// Creates one appointment per vessel past the batch size, with tasks on the first
/// and the last appointment.
///
/// Expected: every appointment gets its own vessel and only its own tasks, in status order
#[tokio::test]
async fn loads_relations_across_batches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut appointments = Vec::new();
    for _ in 0..=RELATION_BATCH_SIZE {
        let vessel = factory::create_vessel(db).await?;
        appointments.push(factory::create_appointment(db, vessel.id).await?);
    }
    let first = appointments[0].id;
    let last = appointments[RELATION_BATCH_SIZE].id;
    let first_done = TaskFactory::new(db, first).status(2).build().await?;
    let first_open = TaskFactory::new(db, first).status(0).build().await?;
    let last_task = TaskFactory::new(db, last).build().await?;

    let repo = AppointmentRepository::new(db);
    let rows = repo
        .list_with_spec(&appointments_specification(
            &AppointmentsSpecificationParams::default(),
        ))
        .await?;

    assert_eq!(rows.len(), RELATION_BATCH_SIZE + 1);
    for row in &rows {
        let vessel = row.vessel.as_ref().expect("vessel loaded");
        assert_eq!(vessel.id, row.appointment.vessel_id);

        let task_ids: Vec<i32> = row.tasks.iter().map(|t| t.id).collect();
        if row.appointment.id == first {
            assert_eq!(task_ids, vec![first_open.id, first_done.id]);
        } else if row.appointment.id == last {
            assert_eq!(task_ids, vec![last_task.id]);
        } else {
            assert!(task_ids.is_empty());
        }
    }

    Ok(())
}
