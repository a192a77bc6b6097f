use crate::server::{
    data::{professional::ProfessionalRepository, schedule::ScheduleRepository},
    model::professional::{CreateScheduleSlotParams, ScheduleStatus, UpdateProfessionalParams},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod get_active;
mod schedule;
mod update;
