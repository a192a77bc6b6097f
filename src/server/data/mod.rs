//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All tenant-owned queries take the caller's clinic ID and filter on it.

pub mod appointment;
pub mod clinic;
pub mod credential;
pub mod insurance_plan;
pub mod patient;
pub mod procedure;
pub mod professional;
pub mod report;
pub mod schedule;
pub mod user;

#[cfg(test)]
mod test;
