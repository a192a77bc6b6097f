//! Factory for linking procedures to appointments.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links an existing procedure to an existing appointment.
pub async fn create_appointment_procedure(
    db: &DatabaseConnection,
    appointment_id: i32,
    procedure_id: i32,
) -> Result<entity::appointment_procedure::Model, DbErr> {
    entity::appointment_procedure::ActiveModel {
        appointment_id: ActiveValue::Set(appointment_id),
        procedure_id: ActiveValue::Set(procedure_id),
    }
    .insert(db)
    .await
}
