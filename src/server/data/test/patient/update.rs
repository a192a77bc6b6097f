use super::*;

/// Tests a partial update.
///
/// Verifies that provided fields change while omitted fields keep their value.
///
/// Expected: Ok with new name and phone, unchanged national id
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let patient = factory::create_patient(db, clinic.id).await?;

    let repo = PatientRepository::new(db);
    let updated = repo
        .update(UpdatePatientParams {
            id: patient.id,
            clinic_id: clinic.id,
            name: Some("Renamed".to_string()),
            phone: Some("5511000000000".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.phone, "5511000000000");
    assert_eq!(updated.national_id, patient.national_id);
    assert_eq!(updated.email, patient.email);

    Ok(())
}

/// Tests updating a patient through another clinic.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_other_clinic() -> Result<(), DbErr> {
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
    let result = repo
        .update(UpdatePatientParams {
            id: patient.id,
            clinic_id: other.id,
            name: Some("Hijacked".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
