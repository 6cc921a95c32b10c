//! # Bookshelf DB
//!
//! Database pool and migrations for the Bookshelf API.
//!
//! The service keeps its users and books in SQLite through SQLx. Migrations
//! live in `crates/bookshelf-db/migrations` and are embedded into the binary
//! at compile time, so a fresh database file is usable right after
//! [`init_db_pool`] returns.
//!
//! # Example
//!
//! ```ignore
//! use bookshelf_config::DatabaseConfig;
//! use bookshelf_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sqlx::Error> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     // Use pool for database operations
//!     Ok(())
//! }
//! ```

use bookshelf_config::DatabaseConfig;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;

// Re-export the pool type for convenience
pub use sqlx::SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connects to the configured database and brings its schema up to date.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    run_migrations(&pool).await?;

    tracing::info!(max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// Creates a private in-memory database with the full schema applied.
///
/// The pool is pinned to a single connection that never expires: every
/// SQLite `:memory:` connection is its own database.
pub async fn init_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
