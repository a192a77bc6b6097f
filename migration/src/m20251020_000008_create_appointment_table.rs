use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251020_000001_create_clinic_table::Clinic,
    m20251020_000003_create_health_professional_table::HealthProfessional,
    m20251020_000005_create_patient_table::Patient,
    m20251020_000006_create_insurance_plan_table::InsurancePlan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::ClinicId))
                    .col(integer(Appointment::PatientId))
                    .col(integer(Appointment::ProfessionalId))
                    .col(integer_null(Appointment::InsurancePlanId))
                    .col(timestamp_with_time_zone(Appointment::StartsAt))
                    .col(timestamp_with_time_zone_null(Appointment::EndsAt))
                    .col(double_null(Appointment::Price))
                    .col(boolean(Appointment::Telemedicine).default(false))
                    .col(string_len(Appointment::Status, 16))
                    .col(text_null(Appointment::Notes))
                    .col(
                        timestamp_with_time_zone(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_clinic_id")
                            .from(Appointment::Table, Appointment::ClinicId)
                            .to(Clinic::Table, Clinic::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient_id")
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_professional_id")
                            .from(Appointment::Table, Appointment::ProfessionalId)
                            .to(HealthProfessional::Table, HealthProfessional::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_insurance_plan_id")
                            .from(Appointment::Table, Appointment::InsurancePlanId)
                            .to(InsurancePlan::Table, InsurancePlan::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_clinic_starts_at")
                    .table(Appointment::Table)
                    .col(Appointment::ClinicId)
                    .col(Appointment::StartsAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    ClinicId,
    PatientId,
    ProfessionalId,
    InsurancePlanId,
    StartsAt,
    EndsAt,
    Price,
    Telemedicine,
    Status,
    Notes,
    CreatedAt,
}
