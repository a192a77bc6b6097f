use super::*;

/// Tests the duplicate national id check.
///
/// Verifies the check is scoped to the clinic and ignores the excluded patient.
///
/// Expected: taken in own clinic, free in other clinic, free when excluding the owner
#[tokio::test]
async fn checks_within_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let patient = factory::patient::PatientFactory::new(db, clinic.id)
        .national_id("99988877766")
        .build()
        .await?;

    let repo = PatientRepository::new(db);

    assert!(repo.national_id_taken(clinic.id, "99988877766", None).await?);
    assert!(!repo.national_id_taken(other.id, "99988877766", None).await?);
    assert!(
        !repo
            .national_id_taken(clinic.id, "99988877766", Some(patient.id))
            .await?
    );

    Ok(())
}
