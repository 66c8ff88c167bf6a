use std::sync::Arc;

use tracing::{info, warn};

use crate::config;
use crate::database::{DatabaseManager, MemoryPostStore, PgPostStore, PostStore};
use crate::server;
use crate::state::AppState;

pub async fn handle(memory: bool) -> anyhow::Result<()> {
    let config = config::config();
    info!("Starting Blog API in {:?} mode", config.environment);

    let store: Arc<dyn PostStore> = if memory {
        warn!("Using in-memory post store; posts are lost on shutdown");
        Arc::new(MemoryPostStore::new())
    } else {
        let pool = DatabaseManager::connect(&config.database).await?;
        if config.database.ensure_schema {
            DatabaseManager::ensure_schema(&pool).await?;
        }
        Arc::new(PgPostStore::new(pool))
    };

    let state = AppState::new(store, &config.security.jwt_secret)?;
    server::serve(state, config).await
}
