mod appointment;
mod credential;
mod insurance_plan;
mod patient;
mod procedure;
mod professional;
mod report;
mod user;

/// Connects to a fresh in-memory SQLite database with every migration applied.
///
/// Unlike `TestBuilder`, the schema includes the unique indexes created by the migrations.
async fn migrated_database() -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    use migration::{Migrator, MigratorTrait};

    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}
