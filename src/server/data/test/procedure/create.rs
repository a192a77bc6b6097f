use super::*;

/// Tests the database constraint on procedure names.
///
/// Verifies that the migrated schema rejects a second procedure with the same name in
/// one clinic even when the service check is bypassed.
///
/// Expected: Err for the duplicate, Ok for the same name in another clinic
#[tokio::test]
async fn rejects_duplicate_name_within_clinic() -> Result<(), DbErr> {
    let db = migrated_database().await?;
    let clinic = factory::create_clinic(&db).await?;
    let other = factory::create_clinic(&db).await?;

    let repo = ProcedureRepository::new(&db);
    repo.create(CreateProcedureParams {
        clinic_id: clinic.id,
        fields: fields("Consultation"),
    })
    .await?;

    let duplicate = repo
        .create(CreateProcedureParams {
            clinic_id: clinic.id,
            fields: fields("Consultation"),
        })
        .await;

    assert!(duplicate.is_err());
    assert!(repo
        .create(CreateProcedureParams {
            clinic_id: other.id,
            fields: fields("Consultation"),
        })
        .await
        .is_ok());

    Ok(())
}
