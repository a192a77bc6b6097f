//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod appointment;
pub mod auth;
pub mod clinic;
pub mod credential;
pub mod insurance_plan;
pub mod patient;
pub mod procedure;
pub mod professional;
pub mod report;
pub mod user;
