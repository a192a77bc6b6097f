use super::*;

/// Tests filtering by status, modality and payer.
///
/// Expected: each filter keeps only the matching appointments
#[tokio::test]
async fn applies_status_modality_and_payer_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, patient, professional, scheduled) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;
    let online_insured =
        factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, professional.id)
            .status("COMPLETED")
            .telemedicine(true)
            .insurance_plan_id(Some(plan.id))
            .build()
            .await?;

    let repo = AppointmentRepository::new(db);

    let completed = repo
        .get_filtered(
            clinic.id,
            &AppointmentFilter {
                status: Some(AppointmentStatus::Completed),
                ..Default::default()
            },
        )
        .await?;
    let in_person = repo
        .get_filtered(
            clinic.id,
            &AppointmentFilter {
                telemedicine: Some(false),
                ..Default::default()
            },
        )
        .await?;
    let private = repo
        .get_filtered(
            clinic.id,
            &AppointmentFilter {
                insured: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, online_insured.id);
    assert_eq!(in_person.len(), 1);
    assert_eq!(in_person[0].id, scheduled.id);
    assert_eq!(private.len(), 1);
    assert_eq!(private[0].id, scheduled.id);

    Ok(())
}

/// Tests the time window and ordering.
///
/// Verifies that both bounds are inclusive and that the order can be reversed.
///
/// Expected: appointments inside the window, oldest or newest first
#[tokio::test]
async fn filters_range_and_orders_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, professional) =
        factory::helpers::create_professional_with_dependencies(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let mut ids = Vec::new();
    for offset in [0, 5, 40] {
        let appointment = factory::appointment::AppointmentFactory::new(
            db,
            clinic.id,
            patient.id,
            professional.id,
        )
        .starts_at(start + Duration::days(offset))
        .build()
        .await?;
        ids.push(appointment.id);
    }

    let range = DateRange {
        start,
        end: start + Duration::days(5),
    };
    let repo = AppointmentRepository::new(db);

    let oldest_first = repo
        .get_filtered(
            clinic.id,
            &AppointmentFilter {
                range: Some(range),
                ..Default::default()
            },
        )
        .await?;
    let newest_first = repo
        .get_filtered(
            clinic.id,
            &AppointmentFilter {
                range: Some(range),
                order: StartOrder::NewestFirst,
                ..Default::default()
            },
        )
        .await?;

    let oldest_ids: Vec<i32> = oldest_first.iter().map(|a| a.id).collect();
    let newest_ids: Vec<i32> = newest_first.iter().map(|a| a.id).collect();

    assert_eq!(oldest_ids, vec![ids[0], ids[1]]);
    assert_eq!(newest_ids, vec![ids[1], ids[0]]);

    Ok(())
}
