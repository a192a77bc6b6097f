use crate::server::{
    data::patient::PatientRepository,
    model::patient::{CreatePatientParams, PatientAddress, UpdatePatientParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate;
mod find_active;
mod get_active;
mod national_id_taken;
mod update;

fn create_params(clinic_id: i32, national_id: &str) -> CreatePatientParams {
    CreatePatientParams {
        clinic_id,
        national_id: national_id.to_string(),
        name: "Maria Silva".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
        email: "maria@example.test".to_string(),
        phone: "5511999990000".to_string(),
        address: PatientAddress {
            city: Some("Campinas".to_string()),
            ..Default::default()
        },
    }
}
