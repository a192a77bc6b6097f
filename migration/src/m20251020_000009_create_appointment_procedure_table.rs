use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000007_create_procedure_table::Procedure,
    m20251020_000008_create_appointment_table::Appointment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppointmentProcedure::Table)
                    .if_not_exists()
                    .col(integer(AppointmentProcedure::AppointmentId))
                    .col(integer(AppointmentProcedure::ProcedureId))
                    .primary_key(
                        Index::create()
                            .col(AppointmentProcedure::AppointmentId)
                            .col(AppointmentProcedure::ProcedureId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_procedure_appointment_id")
                            .from(
                                AppointmentProcedure::Table,
                                AppointmentProcedure::AppointmentId,
                            )
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_procedure_procedure_id")
                            .from(AppointmentProcedure::Table, AppointmentProcedure::ProcedureId)
                            .to(Procedure::Table, Procedure::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppointmentProcedure::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppointmentProcedure {
    Table,
    AppointmentId,
    ProcedureId,
}
