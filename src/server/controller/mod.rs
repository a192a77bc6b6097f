//! HTTP handlers grouped by resource.
//!
//! Each handler runs its guard first, converts the request DTO into domain params,
//! calls one service and converts the result back into a response DTO.

pub mod appointment;
pub mod auth;
pub mod gateway;
pub mod insurance_plan;
pub mod patient;
pub mod procedure;
pub mod professional;
pub mod report;
pub mod user;
