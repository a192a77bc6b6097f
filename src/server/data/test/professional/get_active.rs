use super::*;

/// Tests listing professionals.
///
/// Verifies that inactive professionals and professionals of other clinics are excluded.
///
/// Expected: Ok with only the active professional of the clinic
#[tokio::test]
async fn lists_active_professionals_of_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, active) = factory::helpers::create_professional_with_dependencies(db).await?;
    let inactive_user = factory::create_user(db, clinic.id).await?;
    factory::professional::ProfessionalFactory::new(db, clinic.id, inactive_user.id)
        .active(false)
        .build()
        .await?;
    factory::helpers::create_professional_with_dependencies(db).await?;

    let repo = ProfessionalRepository::new(db);
    let professionals = repo.get_active(clinic.id).await?;

    assert_eq!(professionals.len(), 1);
    assert_eq!(professionals[0].id, active.id);

    Ok(())
}
