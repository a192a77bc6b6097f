//! SeaORM entity models for the clinic backend.
//!
//! Every tenant-scoped table carries a `clinic_id` column referencing `clinic`.

pub mod prelude;

pub mod appointment;
pub mod appointment_procedure;
pub mod bot_interaction;
pub mod client_credential;
pub mod clinic;
pub mod evaluation;
pub mod health_professional;
pub mod insurance_plan;
pub mod operational_control;
pub mod patient;
pub mod procedure;
pub mod schedule;
pub mod user;
