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
                    .table(Procedure::Table)
                    .if_not_exists()
                    .col(pk_auto(Procedure::Id))
                    .col(integer(Procedure::ClinicId))
                    .col(string(Procedure::Name))
                    .col(string_null(Procedure::Kind))
                    .col(double_null(Procedure::Price))
                    .col(integer_null(Procedure::DurationMinutes))
                    .col(boolean(Procedure::Telemedicine).default(false))
                    .col(text_null(Procedure::Description))
                    .col(boolean(Procedure::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_procedure_clinic_id")
                            .from(Procedure::Table, Procedure::ClinicId)
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
                    .name("idx_procedure_clinic_name")
                    .table(Procedure::Table)
                    .col(Procedure::ClinicId)
                    .col(Procedure::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Procedure::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Procedure {
    Table,
    Id,
    ClinicId,
    Name,
    Kind,
    Price,
    DurationMinutes,
    Telemedicine,
    Description,
    Active,
}
