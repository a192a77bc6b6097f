use super::*;

/// Tests listing patients.
///
/// Verifies that only active patients of the clinic are returned, ordered by name.
///
/// Expected: Ok with ["Ana", "Bruno"]
#[tokio::test]
async fn lists_active_patients_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;

    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Bruno")
        .build()
        .await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Ana")
        .build()
        .await?;
    factory::patient::PatientFactory::new(db, clinic.id)
        .name("Carla")
        .active(false)
        .build()
        .await?;
    factory::patient::PatientFactory::new(db, other.id)
        .name("Aaron")
        .build()
        .await?;

    let repo = PatientRepository::new(db);
    let names: Vec<String> = repo
        .get_active(clinic.id)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    assert_eq!(names, vec!["Ana".to_string(), "Bruno".to_string()]);

    Ok(())
}
