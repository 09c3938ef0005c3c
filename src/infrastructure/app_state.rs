use std::sync::Arc;

use crate::application::roster::RosterLock;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database;
use crate::infrastructure::database::repositories::SqlitePlayerRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Player repository
    pub player_repo: Arc<SqlitePlayerRepository>,

    /// Serializes roster mutations against each other and against reads
    pub roster_lock: Arc<RosterLock>,

    pub config: AppConfig,
}

impl AppState {
    /// Build state from environment configuration
    pub async fn new() -> anyhow::Result<Self> {
        Self::from_config(AppConfig::from_env()).await
    }

    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        tracing::info!("Connecting to database: {}", config.database_url);

        let pool = database::connect(&config.database_url).await?;

        let player_repo = Arc::new(SqlitePlayerRepository::new(pool));
        let roster_lock = Arc::new(RosterLock::new());

        Ok(Self {
            player_repo,
            roster_lock,
            config,
        })
    }
}
