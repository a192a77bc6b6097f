//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and tenant ownership checks
//! - **Orchestration**: Coordinating multiple repository calls and upstream relays
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod appointment;
pub mod auth;
pub mod gateway;
pub mod insurance_plan;
pub mod patient;
pub mod procedure;
pub mod professional;
pub mod report;
pub mod user;
