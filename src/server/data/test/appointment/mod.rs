use crate::server::{
    data::appointment::AppointmentRepository,
    model::{
        appointment::{
            AppointmentFilter, AppointmentStatus, StartOrder, UpdateAppointmentParams,
        },
        report::DateRange,
    },
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod get_filtered;
mod get_with_names;
mod link_procedures;
mod update;
