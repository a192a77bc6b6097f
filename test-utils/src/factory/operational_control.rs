//! Operational control factory for bot productivity reports.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an operational control row for the given reference date.
pub async fn create_operational_control(
    db: &DatabaseConnection,
    clinic_id: i32,
    reference_date: NaiveDate,
    bot_hours_worked: f64,
    estimated_savings: f64,
) -> Result<entity::operational_control::Model, DbErr> {
    entity::operational_control::ActiveModel {
        clinic_id: ActiveValue::Set(clinic_id),
        bot_hours_worked: ActiveValue::Set(bot_hours_worked),
        estimated_savings: ActiveValue::Set(estimated_savings),
        reference_date: ActiveValue::Set(reference_date),
        ..Default::default()
    }
    .insert(db)
    .await
}
