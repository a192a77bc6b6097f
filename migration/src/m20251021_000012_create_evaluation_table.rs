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
                    .table(Evaluation::Table)
                    .if_not_exists()
                    .col(pk_auto(Evaluation::Id))
                    .col(integer(Evaluation::ClinicId))
                    .col(integer_null(Evaluation::PatientId))
                    .col(text_null(Evaluation::ProfessionalFeedback))
                    .col(text_null(Evaluation::Description))
                    .col(
                        timestamp_with_time_zone(Evaluation::EvaluatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_evaluation_clinic_id")
                            .from(Evaluation::Table, Evaluation::ClinicId)
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
            .drop_table(Table::drop().table(Evaluation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Evaluation {
    Table,
    Id,
    ClinicId,
    PatientId,
    ProfessionalFeedback,
    Description,
    EvaluatedAt,
}
