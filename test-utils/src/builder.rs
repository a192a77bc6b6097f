use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` in dependency order, then call `build()` to
/// create the configured test context backed by an in-memory SQLite database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Clinic, User};
///
/// let test = TestBuilder::new()
///     .with_table(Clinic)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference, SQLite
    /// enforces the constraints on insert.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tenant root tables: Clinic and User.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Clinic).with_table(User)
    }

    /// Adds every table required to book appointments.
    ///
    /// Adds, in dependency order:
    /// - Clinic, User
    /// - HealthProfessional, Schedule
    /// - Patient, InsurancePlan, Procedure
    /// - Appointment, AppointmentProcedure
    pub fn with_appointment_tables(self) -> Self {
        self.with_user_tables()
            .with_table(HealthProfessional)
            .with_table(Schedule)
            .with_table(Patient)
            .with_table(InsurancePlan)
            .with_table(Procedure)
            .with_table(Appointment)
            .with_table(AppointmentProcedure)
    }

    /// Adds the complete schema, including reporting and gateway tables.
    ///
    /// Equivalent to `with_appointment_tables()` followed by BotInteraction,
    /// OperationalControl, Evaluation and ClientCredential.
    pub fn with_all_tables(self) -> Self {
        self.with_appointment_tables()
            .with_table(BotInteraction)
            .with_table(OperationalControl)
            .with_table(Evaluation)
            .with_table(ClientCredential)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
