use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_clinic_table::Clinic, m20251020_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HealthProfessional::Table)
                    .if_not_exists()
                    .col(pk_auto(HealthProfessional::Id))
                    .col(integer(HealthProfessional::ClinicId))
                    .col(integer_uniq(HealthProfessional::UserId))
                    .col(string(HealthProfessional::Name))
                    .col(date(HealthProfessional::BirthDate))
                    .col(string(HealthProfessional::NationalId))
                    .col(string(HealthProfessional::Council))
                    .col(string(HealthProfessional::CouncilNumber))
                    .col(string_len(HealthProfessional::CouncilState, 2))
                    .col(string_null(HealthProfessional::Rqe))
                    .col(string(HealthProfessional::Phone))
                    .col(string(HealthProfessional::Email))
                    .col(boolean(HealthProfessional::Telemedicine).default(false))
                    .col(string(HealthProfessional::Specialty))
                    .col(boolean(HealthProfessional::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_professional_clinic_id")
                            .from(HealthProfessional::Table, HealthProfessional::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_health_professional_user_id")
                            .from(HealthProfessional::Table, HealthProfessional::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HealthProfessional::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HealthProfessional {
    Table,
    Id,
    ClinicId,
    UserId,
    Name,
    BirthDate,
    NationalId,
    Council,
    CouncilNumber,
    CouncilState,
    Rqe,
    Phone,
    Email,
    Telemedicine,
    Specialty,
    Active,
}
