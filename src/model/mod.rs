//! Data transfer objects shared by the HTTP API.
//!
//! Every request and response body is defined here with `serde` for the wire format
//! and `utoipa::ToSchema` for the OpenAPI document. Server-side domain models convert
//! into these types at the controller boundary.

pub mod api;
pub mod appointment;
pub mod auth;
pub mod gateway;
pub mod insurance_plan;
pub mod patient;
pub mod procedure;
pub mod professional;
pub mod report;
pub mod user;
