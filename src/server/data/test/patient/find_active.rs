use super::*;

/// Tests that patients of another clinic are invisible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_patient_of_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic_a = factory::create_clinic(db).await?;
    let clinic_b = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic_a.id).await?;

    let repo = PatientRepository::new(db);

    assert!(repo.find_active(clinic_b.id, patient.id).await?.is_none());
    assert!(repo.find_active(clinic_a.id, patient.id).await?.is_some());

    Ok(())
}

/// Tests that inactive patients are hidden from active lookups but not from national id lookups.
///
/// Expected: find_active returns None, find_by_national_id returns the patient
#[tokio::test]
async fn hides_inactive_patient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let patient = factory::patient::PatientFactory::new(db, clinic.id)
        .active(false)
        .build()
        .await?;

    let repo = PatientRepository::new(db);

    assert!(repo.find_active(clinic.id, patient.id).await?.is_none());
    let by_national_id = repo
        .find_by_national_id(clinic.id, &patient.national_id)
        .await?;
    assert_eq!(by_national_id.map(|p| p.id), Some(patient.id));

    Ok(())
}
