use std::collections::HashSet;

use crate::server::{data::report::ReportRepository, model::appointment::AppointmentStatus};
use chrono::{NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod lookups;
mod patients;
mod procedure_executions;
