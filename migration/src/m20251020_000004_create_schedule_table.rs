use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_clinic_table::Clinic,
    m20251020_000003_create_health_professional_table::HealthProfessional,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(integer(Schedule::ClinicId))
                    .col(integer(Schedule::ProfessionalId))
                    .col(date(Schedule::Date))
                    .col(timestamp_with_time_zone(Schedule::StartsAt))
                    .col(timestamp_with_time_zone(Schedule::EndsAt))
                    .col(string_len(Schedule::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_clinic_id")
                            .from(Schedule::Table, Schedule::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_professional_id")
                            .from(Schedule::Table, Schedule::ProfessionalId)
                            .to(HealthProfessional::Table, HealthProfessional::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    ClinicId,
    ProfessionalId,
    Date,
    StartsAt,
    EndsAt,
    Status,
}
