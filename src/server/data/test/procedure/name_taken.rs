use super::*;

/// Tests the duplicate name check.
///
/// Verifies that the check is scoped to the clinic and also sees inactive procedures.
///
/// Expected: taken in own clinic (even inactive), free in another clinic
#[tokio::test]
async fn checks_within_clinic_including_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    factory::procedure::ProcedureFactory::new(db, clinic.id)
        .name("Blood test")
        .active(false)
        .build()
        .await?;

    let repo = ProcedureRepository::new(db);

    assert!(repo.name_taken(clinic.id, "Blood test", None).await?);
    assert!(!repo.name_taken(other.id, "Blood test", None).await?);

    Ok(())
}

/// Tests creating a procedure, then checking its own name while excluding it.
///
/// Expected: Ok(false) when the only match is the excluded procedure
#[tokio::test]
async fn ignores_excluded_procedure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;

    let repo = ProcedureRepository::new(db);
    let procedure = repo
        .create(CreateProcedureParams {
            clinic_id: clinic.id,
            fields: fields("X-ray"),
        })
        .await?;

    assert!(!repo.name_taken(clinic.id, "X-ray", Some(procedure.id)).await?);

    Ok(())
}
