use std::sync::Arc;

use blog_api_rust::{
    config,
    database::{DatabaseManager, PgPostStore},
    server, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    server::init_tracing();

    let config = config::config();
    tracing::info!("Starting Blog API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database).await?;
    if config.database.ensure_schema {
        DatabaseManager::ensure_schema(&pool).await?;
    }

    let state = AppState::new(Arc::new(PgPostStore::new(pool)), &config.security.jwt_secret)?;

    server::serve(state, config).await
}
