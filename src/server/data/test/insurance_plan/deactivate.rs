use super::*;

/// Tests soft-deleting a plan.
///
/// Expected: true once, false afterwards and the plan is no longer found
#[tokio::test]
async fn deactivates_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let plan = factory::create_insurance_plan(db, clinic.id).await?;

    let repo = InsurancePlanRepository::new(db);

    assert!(repo.deactivate(clinic.id, plan.id).await?);
    assert!(!repo.deactivate(clinic.id, plan.id).await?);
    assert!(repo.find_active(clinic.id, plan.id).await?.is_none());

    Ok(())
}
