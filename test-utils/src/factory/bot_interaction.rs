//! Bot interaction factory for conversion reports.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating bot interaction rows.
pub struct BotInteractionFactory<'a> {
    db: &'a DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
    kind: String,
    created_at: DateTime<Utc>,
}

impl<'a> BotInteractionFactory<'a> {
    /// Defaults to a `QUESTION` interaction created now.
    pub fn new(db: &'a DatabaseConnection, clinic_id: i32, patient_id: i32) -> Self {
        Self {
            db,
            clinic_id,
            patient_id,
            kind: "QUESTION".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::bot_interaction::Model, DbErr> {
        entity::bot_interaction::ActiveModel {
            clinic_id: ActiveValue::Set(self.clinic_id),
            patient_id: ActiveValue::Set(self.patient_id),
            kind: ActiveValue::Set(self.kind),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_bot_interaction(
    db: &DatabaseConnection,
    clinic_id: i32,
    patient_id: i32,
) -> Result<entity::bot_interaction::Model, DbErr> {
    BotInteractionFactory::new(db, clinic_id, patient_id)
        .build()
        .await
}
