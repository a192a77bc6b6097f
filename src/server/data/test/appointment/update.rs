use super::*;

/// Tests a partial update.
///
/// Verifies that omitted fields keep their stored values.
///
/// Expected: Ok with the new status and notes, unchanged start time
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(UpdateAppointmentParams {
            id: appointment.id,
            clinic_id: clinic.id,
            status: Some(AppointmentStatus::Confirmed),
            notes: Some(Some("Bring exams".to_string())),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.status, AppointmentStatus::Confirmed);
    assert_eq!(updated.notes.as_deref(), Some("Bring exams"));
    assert_eq!(updated.starts_at, appointment.starts_at);
    assert_eq!(updated.price, appointment.price);

    Ok(())
}

/// Tests updating an appointment of another clinic.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn rejects_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(UpdateAppointmentParams {
            id: appointment.id,
            clinic_id: other.id,
            status: Some(AppointmentStatus::Cancelled),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests clearing the nullable columns.
///
/// Expected: Ok with `ends_at` and `notes` set to NULL, other fields unchanged
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    repo.update(UpdateAppointmentParams {
        id: appointment.id,
        clinic_id: clinic.id,
        ends_at: Some(Some(appointment.starts_at + Duration::hours(1))),
        notes: Some(Some("Fasting".to_string())),
        ..Default::default()
    })
    .await?;

    let cleared = repo
        .update(UpdateAppointmentParams {
            id: appointment.id,
            clinic_id: clinic.id,
            ends_at: Some(None),
            notes: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(cleared.ends_at, None);
    assert_eq!(cleared.notes, None);
    assert_eq!(cleared.starts_at, appointment.starts_at);

    Ok(())
}
