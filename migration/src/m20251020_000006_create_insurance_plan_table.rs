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
                    .table(InsurancePlan::Table)
                    .if_not_exists()
                    .col(pk_auto(InsurancePlan::Id))
                    .col(integer(InsurancePlan::ClinicId))
                    .col(string(InsurancePlan::Name))
                    .col(boolean(InsurancePlan::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_plan_clinic_id")
                            .from(InsurancePlan::Table, InsurancePlan::ClinicId)
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
                    .name("idx_insurance_plan_clinic_name")
                    .table(InsurancePlan::Table)
                    .col(InsurancePlan::ClinicId)
                    .col(InsurancePlan::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InsurancePlan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum InsurancePlan {
    Table,
    Id,
    ClinicId,
    Name,
    Active,
}
