use std::env;

use crate::env_or;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite://bookshelf.db?mode=rwc`
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://bookshelf.db?mode=rwc".to_string()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}
