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
                    .table(OperationalControl::Table)
                    .if_not_exists()
                    .col(pk_auto(OperationalControl::Id))
                    .col(integer(OperationalControl::ClinicId))
                    .col(double(OperationalControl::BotHoursWorked).default(0.0))
                    .col(double(OperationalControl::EstimatedSavings).default(0.0))
                    .col(date(OperationalControl::ReferenceDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_operational_control_clinic_id")
                            .from(OperationalControl::Table, OperationalControl::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OperationalControl::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OperationalControl {
    Table,
    Id,
    ClinicId,
    BotHoursWorked,
    EstimatedSavings,
    ReferenceDate,
}
