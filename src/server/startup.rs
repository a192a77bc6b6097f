use std::time::Duration;

use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Accepts any SQLite or Postgres URL supported by SeaORM. Migrations run on every start
/// so the schema is current before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Builds the HTTP client shared by the gateway relays.
///
/// Redirects are disabled so upstream URLs cannot bounce requests elsewhere, and every
/// request is bounded by a timeout.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

    Ok(client)
}
