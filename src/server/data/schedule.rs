use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::professional::{CreateScheduleSlotParams, ScheduleSlot};

/// Availability slots of professionals.
pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateScheduleSlotParams) -> Result<ScheduleSlot, DbErr> {
        let entity = entity::schedule::ActiveModel {
            clinic_id: ActiveValue::Set(params.clinic_id),
            professional_id: ActiveValue::Set(params.professional_id),
            date: ActiveValue::Set(params.date),
            starts_at: ActiveValue::Set(params.starts_at),
            ends_at: ActiveValue::Set(params.ends_at),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        ScheduleSlot::from_entity(entity)
    }

    /// Gets the slots of a professional of the clinic, earliest first.
    pub async fn get_by_professional(
        &self,
        clinic_id: i32,
        professional_id: i32,
    ) -> Result<Vec<ScheduleSlot>, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::ClinicId.eq(clinic_id))
            .filter(entity::schedule::Column::ProfessionalId.eq(professional_id))
            .order_by_asc(entity::schedule::Column::StartsAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(ScheduleSlot::from_entity)
            .collect()
    }
}
