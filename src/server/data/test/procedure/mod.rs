use super::migrated_database;
use crate::server::{
    data::procedure::ProcedureRepository,
    model::procedure::{CreateProcedureParams, ProcedureFields, UpdateProcedureParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active_by_ids;
mod name_taken;
mod update;

fn fields(name: &str) -> ProcedureFields {
    ProcedureFields {
        name: name.to_string(),
        kind: Some("exam".to_string()),
        price: Some(80.0),
        duration_minutes: Some(30),
        telemedicine: false,
        description: None,
    }
}
