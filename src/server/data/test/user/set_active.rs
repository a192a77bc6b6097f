use super::*;

/// Tests deactivating a user.
///
/// Expected: Ok with the stored user inactive
#[tokio::test]
async fn deactivates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let created = factory::create_user(db, clinic.id).await?;

    let repo = UserRepository::new(db);
    repo.set_active(created.id, false).await?;

    let user = repo.find_by_id(created.id).await?.unwrap();
    assert!(!user.active);

    Ok(())
}
