use super::*;

/// Tests updating and then deactivating a procedure.
///
/// Expected: update applies, later updates fail once the procedure is inactive
#[tokio::test]
async fn updates_until_deactivated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let procedure = factory::create_procedure(db, clinic.id).await?;

    let repo = ProcedureRepository::new(db);
    let updated = repo
        .update(UpdateProcedureParams {
            id: procedure.id,
            clinic_id: clinic.id,
            fields: fields("Ultrasound"),
        })
        .await?;

    assert_eq!(updated.name, "Ultrasound");
    assert_eq!(updated.price, Some(80.0));

    assert!(repo.deactivate(clinic.id, procedure.id).await?);
    let result = repo
        .update(UpdateProcedureParams {
            id: procedure.id,
            clinic_id: clinic.id,
            fields: fields("Too late"),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
