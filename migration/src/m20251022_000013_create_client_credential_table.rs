use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000001_create_clinic_table::Clinic;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientCredential::Table)
                    .if_not_exists()
                    .col(pk_auto(ClientCredential::Id))
                    .col(integer(ClientCredential::ClinicId))
                    .col(string_len(ClientCredential::ServiceType, 32))
                    .col(text_null(ClientCredential::ApiKey))
                    .col(string_null(ClientCredential::InstanceUrl))
                    .col(string_null(ClientCredential::Model))
                    .col(boolean(ClientCredential::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_credential_clinic_id")
                            .from(ClientCredential::Table, ClientCredential::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_client_credential_clinic_service")
                    .table(ClientCredential::Table)
                    .col(ClientCredential::ClinicId)
                    .col(ClientCredential::ServiceType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientCredential::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClientCredential {
    Table,
    Id,
    ClinicId,
    ServiceType,
    ApiKey,
    InstanceUrl,
    Model,
    Active,
}
