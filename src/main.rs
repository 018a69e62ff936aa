use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use veracity::{analyzer::OpenAiProvider, api, app_state::AppState, config::Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    // Lazy pool: a down database must not keep the API from serving, since
    // storage failures degrade to logged warnings and empty history.
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(config.database_url())
        .expect("Failed to create database pool");

    if let Err(err) = sqlx::migrate!("./migrations").run(&pool).await {
        warn!(error = %err, "failed to run migrations; history will be unavailable");
    }

    let provider = OpenAiProvider::new(config.openai_api_key(), config.openai_model());
    let state = AppState::new(pool, Arc::new(provider));
    let app = api::router(state, config.cors_origins());

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("Failed to bind to address");
    info!(addr = %config.bind_addr(), "listening");
    axum::serve(listener, app).await.unwrap();
}
