use super::*;

/// Tests looking up the active credential of a service.
///
/// Expected: Some with the stored overrides
#[tokio::test]
async fn finds_active_credential() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    factory::client_credential::ClientCredentialFactory::new(db, clinic.id, "OPENAI_API")
        .api_key("sk-test")
        .model("gpt-4o-mini")
        .build()
        .await?;

    let repo = CredentialRepository::new(db);
    let credential = repo.find_active(clinic.id, "OPENAI_API").await?;

    let credential = credential.expect("credential should be found");
    assert_eq!(credential.api_key.as_deref(), Some("sk-test"));
    assert_eq!(credential.model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(credential.instance_url, None);

    Ok(())
}

/// Tests that inactive credentials, other services and other clinics are ignored.
///
/// Expected: None in every case
#[tokio::test]
async fn ignores_inactive_and_foreign_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let clinic = factory::create_clinic(db).await?;
    let other = factory::create_clinic(db).await?;
    factory::client_credential::ClientCredentialFactory::new(db, clinic.id, "OLLAMA_API")
        .active(false)
        .build()
        .await?;
    factory::create_client_credential(db, other.id, "MESSAGING_CLIENT").await?;

    let repo = CredentialRepository::new(db);

    assert!(repo.find_active(clinic.id, "OLLAMA_API").await?.is_none());
    assert!(repo
        .find_active(clinic.id, "MESSAGING_CLIENT")
        .await?
        .is_none());

    Ok(())
}
