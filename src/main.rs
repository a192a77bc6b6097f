use clinic_backend::server::{
    config::Config,
    error::AppError,
    router, startup,
    service::auth::{password::PasswordService, token::TokenService},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(
        db,
        http_client,
        TokenService::new(&config.jwt_secret, config.token_ttl_hours),
        PasswordService::new(config.password_hash_rounds),
        config.gateway.clone(),
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Starting server on port {}", config.port);

    axum::serve(listener, router::app(state)).await?;

    Ok(())
}
