use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clinic_id: i32,
    pub patient_id: i32,
    pub professional_id: i32,
    pub insurance_plan_id: Option<i32>,
    pub starts_at: DateTimeUtc,
    pub ends_at: Option<DateTimeUtc>,
    pub price: Option<f64>,
    pub telemedicine: bool,
    /// Stored as `SCHEDULED`, `CONFIRMED`, `COMPLETED`, `CANCELLED` or `NO_SHOW`.
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::patient::Entity",
        from = "Column::PatientId",
        to = "super::patient::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Patient,
    #[sea_orm(
        belongs_to = "super::health_professional::Entity",
        from = "Column::ProfessionalId",
        to = "super::health_professional::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HealthProfessional,
    #[sea_orm(
        belongs_to = "super::insurance_plan::Entity",
        from = "Column::InsurancePlanId",
        to = "super::insurance_plan::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    InsurancePlan,
    #[sea_orm(has_many = "super::appointment_procedure::Entity")]
    AppointmentProcedure,
}

impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Patient.def()
    }
}

impl Related<super::health_professional::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthProfessional.def()
    }
}

impl Related<super::insurance_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsurancePlan.def()
    }
}

impl Related<super::appointment_procedure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentProcedure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
