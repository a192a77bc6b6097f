use super::*;

/// Tests resolving procedure IDs within a clinic.
///
/// Verifies that IDs of other clinics and inactive procedures are skipped.
///
/// Expected: Ok with only the active procedure of the clinic
#[tokio::test]
async fn skips_foreign_and_inactive_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    let own = factory::create_procedure(db, clinic.id).await?;
    let inactive = factory::procedure::ProcedureFactory::new(db, clinic.id)
        .active(false)
        .build()
        .await?;
    let foreign = factory::create_procedure(db, other.id).await?;

    let repo = ProcedureRepository::new(db);
    let found = repo
        .get_active_by_ids(clinic.id, &[own.id, inactive.id, foreign.id])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, own.id);
    assert!(repo.get_active_by_ids(clinic.id, &[]).await?.is_empty());

    Ok(())
}
