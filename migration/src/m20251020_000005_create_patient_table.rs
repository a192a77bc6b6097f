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
                    .table(Patient::Table)
                    .if_not_exists()
                    .col(pk_auto(Patient::Id))
                    .col(integer(Patient::ClinicId))
                    .col(string(Patient::NationalId))
                    .col(string(Patient::Name))
                    .col(date(Patient::BirthDate))
                    .col(string(Patient::Email))
                    .col(string(Patient::Phone))
                    .col(string_null(Patient::IbgeCode))
                    .col(string_null(Patient::PostalCode))
                    .col(string_null(Patient::Street))
                    .col(string_null(Patient::Number))
                    .col(string_null(Patient::Complement))
                    .col(string_null(Patient::District))
                    .col(string_null(Patient::City))
                    .col(string_null(Patient::State))
                    .col(boolean(Patient::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_patient_clinic_id")
                            .from(Patient::Table, Patient::ClinicId)
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
                    .name("idx_patient_clinic_national_id")
                    .table(Patient::Table)
                    .col(Patient::ClinicId)
                    .col(Patient::NationalId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Patient {
    Table,
    Id,
    ClinicId,
    NationalId,
    Name,
    BirthDate,
    Email,
    Phone,
    IbgeCode,
    PostalCode,
    Street,
    Number,
    Complement,
    District,
    City,
    State,
    Active,
}
