use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the account as active with the role's
/// stored representation.
///
/// Expected: Ok with user created, active, and role PROFESSIONAL
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            clinic_id: clinic.id,
            name: "Ana".to_string(),
            email: "ana@clinic.test".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Professional,
        })
        .await?;

    assert_eq!(user.clinic_id, clinic.id);
    assert_eq!(user.email, "ana@clinic.test");
    assert_eq!(user.role, UserRole::Professional);
    assert!(user.active);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.role, "PROFESSIONAL");

    Ok(())
}

/// Tests that emails are unique across clinics.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic_a = factory::create_clinic(db).await?;
    let clinic_b = factory::create_clinic(db).await?;
    factory::user::UserFactory::new(db, clinic_a.id)
        .email("taken@clinic.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            clinic_id: clinic_b.id,
            name: "Other".to_string(),
            email: "taken@clinic.test".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Admin,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
