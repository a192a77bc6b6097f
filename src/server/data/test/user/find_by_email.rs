use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(User)) with matching ID
#[tokio::test]
async fn finds_existing_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let created = factory::user::UserFactory::new(db, clinic.id)
        .email("find@clinic.test")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("find@clinic.test").await?;

    assert_eq!(user.map(|u| u.id), Some(created.id));
    assert!(repo.email_exists("find@clinic.test").await?);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("nobody@clinic.test").await?.is_none());
    assert!(!repo.email_exists("nobody@clinic.test").await?);

    Ok(())
}

/// Tests that an unknown stored role surfaces as an error instead of a default.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    factory::user::UserFactory::new(db, clinic.id)
        .email("odd@clinic.test")
        .role("RECEPTIONIST")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_email("odd@clinic.test").await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
