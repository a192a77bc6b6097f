use super::*;

/// Tests creating a patient.
///
/// Verifies that every field is stored and the patient starts active.
///
/// Expected: Ok with identical values read back
#[tokio::test]
async fn creates_active_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;

    let repo = PatientRepository::new(db);
    let created = repo.create(create_params(clinic.id, "12345678900")).await?;
    let found = repo.find_active(clinic.id, created.id).await?;

    assert!(created.active);
    assert_eq!(created.address.city.as_deref(), Some("Campinas"));
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that the same national id may exist in two clinics.
///
/// Expected: Ok for both inserts
#[tokio::test]
async fn allows_same_national_id_in_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic_a = factory::create_clinic(db).await?;
    let clinic_b = factory::create_clinic(db).await?;

    let repo = PatientRepository::new(db);
    repo.create(create_params(clinic_a.id, "11122233344")).await?;
    let result = repo.create(create_params(clinic_b.id, "11122233344")).await;

    assert!(result.is_ok());

    Ok(())
}
