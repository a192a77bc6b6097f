use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "procedure")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub telemedicine: bool,
    pub description: Option<String>,
    pub active: bool,
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
    #[sea_orm(has_many = "super::appointment_procedure::Entity")]
    AppointmentProcedure,
}

impl Related<super::clinic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clinic.def()
    }
}

impl Related<super::appointment_procedure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentProcedure.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
