use anyhow::Context;
use bookshelf_config::{CorsConfig, DatabaseConfig, JwtConfig};
use bookshelf_db::{SqlitePool, init_db_pool};
use bookshelf_observability::Metrics;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub metrics: Metrics,
}

impl AppState {
    /// Builds state around an existing pool, reading the remaining
    /// configuration from the environment.
    pub fn with_pool(db: SqlitePool) -> anyhow::Result<Self> {
        Ok(Self {
            db,
            jwt_config: JwtConfig::from_env(),
            cors_config: CorsConfig::from_env(),
            metrics: Metrics::new().context("Failed to build metrics recorder")?,
        })
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let db = init_db_pool(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database")?;

    AppState::with_pool(db)
}
