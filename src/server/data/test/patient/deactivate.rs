use super::*;

/// Tests soft-deleting a patient.
///
/// Expected: true on first call, false on second, patient hidden afterwards
#[tokio::test]
async fn deactivates_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);

    assert!(repo.deactivate(clinic.id, patient.id).await?);
    assert!(!repo.deactivate(clinic.id, patient.id).await?);
    assert!(repo.find_active(clinic.id, patient.id).await?.is_none());

    Ok(())
}

/// Tests that another clinic cannot deactivate the patient.
///
/// Expected: false and the patient remains active
#[tokio::test]
async fn ignores_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);

    assert!(!repo.deactivate(other.id, patient.id).await?);
    assert!(repo.find_active(clinic.id, patient.id).await?.is_some());

    Ok(())
}
