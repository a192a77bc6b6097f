use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_clinic_table::Clinic, m20251020_000005_create_patient_table::Patient,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BotInteraction::Table)
                    .if_not_exists()
                    .col(pk_auto(BotInteraction::Id))
                    .col(integer(BotInteraction::ClinicId))
                    .col(integer(BotInteraction::PatientId))
                    .col(string_len(BotInteraction::Kind, 32))
                    .col(
                        timestamp_with_time_zone(BotInteraction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bot_interaction_clinic_id")
                            .from(BotInteraction::Table, BotInteraction::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bot_interaction_patient_id")
                            .from(BotInteraction::Table, BotInteraction::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotInteraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BotInteraction {
    Table,
    Id,
    ClinicId,
    PatientId,
    Kind,
    CreatedAt,
}
