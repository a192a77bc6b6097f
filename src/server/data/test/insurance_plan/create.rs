use super::*;

/// Tests creating a plan and detecting its name as taken.
///
/// Expected: Ok with an active plan, name taken in its clinic only
#[tokio::test]
async fn creates_plan_and_reserves_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = InsurancePlanRepository::new(db);
    let plan = repo
        .create(CreateInsurancePlanParams {
            clinic_id: clinic.id,
            name: "Unimed".to_string(),
        })
        .await?;

    assert!(plan.active);
    assert!(repo.name_taken(clinic.id, "Unimed").await?);
    assert!(!repo.name_taken(other.id, "Unimed").await?);

    Ok(())
}

/// Tests listing plans.
///
/// Expected: active plans of the clinic ordered by name
#[tokio::test]
async fn lists_active_plans_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    for name in ["Sulamerica", "Amil"] {
        factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
            .name(name)
            .build()
            .await?;
    }
    factory::insurance_plan::InsurancePlanFactory::new(db, clinic.id)
        .name("Bradesco")
        .active(false)
        .build()
        .await?;

    let repo = InsurancePlanRepository::new(db);
    let names: Vec<String> = repo
        .get_active(clinic.id)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["Amil", "Sulamerica"]);

    Ok(())
}

/// Tests the database constraint on plan names.
///
/// Expected: Err for a duplicate in the same clinic, Ok in another clinic
#[tokio::test]
async fn rejects_duplicate_name_within_clinic() -> Result<(), DbErr> {
    let db = migrated_database().await?;
    let clinic = factory::create_clinic(&db).await?;
    let other = factory::create_clinic(&db).await?;
    let params = |clinic_id| CreateInsurancePlanParams {
        clinic_id,
        name: "Unimed".to_string(),
    };

    let repo = InsurancePlanRepository::new(&db);
    repo.create(params(clinic.id)).await?;

    assert!(repo.create(params(clinic.id)).await.is_err());
    assert!(repo.create(params(other.id)).await.is_ok());

    Ok(())
}
