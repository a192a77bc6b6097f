use super::*;

/// Tests that an appointment is only visible to its own clinic.
///
/// Expected: Some for the owning clinic, None for another clinic
#[tokio::test]
async fn scopes_lookup_to_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, _, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = AppointmentRepository::new(db);

    let found = repo.find_by_id(clinic.id, appointment.id).await?;
    assert_eq!(found.map(|a| a.status), Some(AppointmentStatus::Scheduled));
    assert!(repo.find_by_id(other.id, appointment.id).await?.is_none());

    Ok(())
}

/// Tests that an unknown stored status surfaces as an error.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, professional) =
        factory::helpers::create_professional_with_dependencies(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;
    let appointment =
        factory::appointment::AppointmentFactory::new(db, clinic.id, patient.id, professional.id)
            .status("POSTPONED")
            .build()
            .await?;

    let repo = AppointmentRepository::new(db);
    let result = repo.find_by_id(clinic.id, appointment.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
