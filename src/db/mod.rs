pub mod advisor_queries;
pub mod company_queries;
pub mod holding_queries;
pub mod investment_queries;
pub mod investor_queries;
pub mod portfolio_queries;
pub mod schema;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Open a pool against `database_url` and make sure the schema exists.
///
/// Foreign keys are enforced on every connection. Connections are never
/// recycled so that `sqlite::memory:` databases survive for the pool's life.
///
/// The bootstrap only creates missing tables. An existing database file with
/// an older table shape is not altered and fails at query time instead.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    schema::init(&pool).await?;
    info!("Database ready at {}", database_url);
    Ok(pool)
}
