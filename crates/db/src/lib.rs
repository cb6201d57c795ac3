//! PostgreSQL persistence for the asset lifecycle.
//!
//! [`PgLifecycleStore`] and [`PgReferenceResolver`] implement the storage
//! seams declared in `assetline-core`. The repositories underneath are thin
//! SQL wrappers returning row structs and `sqlx::Error`.

pub mod error;
pub mod models;
pub mod repositories;
pub mod resolver;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use resolver::PgReferenceResolver;
pub use store::PgLifecycleStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Round trip to the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
