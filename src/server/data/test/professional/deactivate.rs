use super::*;

/// Tests soft-deleting a professional.
///
/// Expected: Some(professional) on first call, None afterwards
#[tokio::test]
async fn deactivates_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, user, professional) =
        factory::helpers::create_professional_with_dependencies(db).await?;

    let repo = ProfessionalRepository::new(db);
    let deactivated = repo.deactivate(clinic.id, professional.id).await?;

    assert_eq!(deactivated.map(|p| p.user_id), Some(user.id));
    assert!(repo.deactivate(clinic.id, professional.id).await?.is_none());
    assert!(repo.find_active(clinic.id, professional.id).await?.is_none());
    assert!(repo.find_by_id(clinic.id, professional.id).await?.is_some());

    Ok(())
}

/// Tests that another clinic cannot deactivate the professional.
///
/// Expected: None and the professional remains active
#[tokio::test]
async fn ignores_other_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_appointment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (clinic, _, professional) =
        factory::helpers::create_professional_with_dependencies(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = ProfessionalRepository::new(db);

    assert!(repo.deactivate(other.id, professional.id).await?.is_none());
    assert!(repo.find_active(clinic.id, professional.id).await?.is_some());

    Ok(())
}
