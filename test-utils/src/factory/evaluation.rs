//! Evaluation factory for NPS reports.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a patient evaluation.
pub async fn create_evaluation(
    db: &DatabaseConnection,
    clinic_id: i32,
    patient_id: Option<i32>,
    description: Option<&str>,
    evaluated_at: DateTime<Utc>,
) -> Result<entity::evaluation::Model, DbErr> {
    entity::evaluation::ActiveModel {
        clinic_id: ActiveValue::Set(clinic_id),
        patient_id: ActiveValue::Set(patient_id),
        professional_feedback: ActiveValue::Set(None),
        description: ActiveValue::Set(description.map(str::to_string)),
        evaluated_at: ActiveValue::Set(evaluated_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
