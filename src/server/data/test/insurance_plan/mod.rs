use super::migrated_database;
use crate::server::{
    data::insurance_plan::InsurancePlanRepository,
    model::insurance_plan::CreateInsurancePlanParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate;
