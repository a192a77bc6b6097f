pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_clinic_table;
mod m20251020_000002_create_user_table;
mod m20251020_000003_create_health_professional_table;
mod m20251020_000004_create_schedule_table;
mod m20251020_000005_create_patient_table;
mod m20251020_000006_create_insurance_plan_table;
mod m20251020_000007_create_procedure_table;
mod m20251020_000008_create_appointment_table;
mod m20251020_000009_create_appointment_procedure_table;
mod m20251021_000010_create_bot_interaction_table;
mod m20251021_000011_create_operational_control_table;
mod m20251021_000012_create_evaluation_table;
mod m20251022_000013_create_client_credential_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_clinic_table::Migration),
            Box::new(m20251020_000002_create_user_table::Migration),
            Box::new(m20251020_000003_create_health_professional_table::Migration),
            Box::new(m20251020_000004_create_schedule_table::Migration),
            Box::new(m20251020_000005_create_patient_table::Migration),
            Box::new(m20251020_000006_create_insurance_plan_table::Migration),
            Box::new(m20251020_000007_create_procedure_table::Migration),
            Box::new(m20251020_000008_create_appointment_table::Migration),
            Box::new(m20251020_000009_create_appointment_procedure_table::Migration),
            Box::new(m20251021_000010_create_bot_interaction_table::Migration),
            Box::new(m20251021_000011_create_operational_control_table::Migration),
            Box::new(m20251021_000012_create_evaluation_table::Migration),
            Box::new(m20251022_000013_create_client_credential_table::Migration),
        ]
    }
}
