use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clinic_id: i32,
    pub professional_id: i32,
    pub date: Date,
    pub starts_at: DateTimeUtc,
    pub ends_at: DateTimeUtc,
    /// Stored as `AVAILABLE` or `BLOCKED`.
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clinic::Entity",
        from = "Column::ClinicId",
        to = "super::clinic::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Clinic,
    #[sea_orm(
        belongs_to = "super::health_professional::Entity",
        from = "Column::ProfessionalId",
        to = "super::health_professional::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HealthProfessional,
}

impl Related<super::health_professional::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthProfessional.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
