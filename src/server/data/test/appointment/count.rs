use super::*;

/// Tests that the count view of a listing agrees with the listing.
///
/// Expected: count equals listing length for the same filter
#[tokio::test]
async fn count_matches_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_port_call_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vessel = factory::create_vessel(db).await?;
    for status in [3, 3, 0] {
        AppointmentFactory::new(db, vessel.id)
            .status(status)
            .build()
            .await?;
    }

    let params = AppointmentsSpecificationParams {
        cancelled: true,
        ..Default::default()
    };
    let spec = appointments_specification(&params);

    let repo = AppointmentRepository::new(db);
    let rows = repo.list_with_spec(&spec).await?;
    let total = repo.count(&spec.for_count()).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(total, rows.len() as u64);

    Ok(())
}
