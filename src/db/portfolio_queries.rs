use sqlx::{SqliteExecutor, SqlitePool};
use crate::models::Portfolio;

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT portfolio_id, value, account_id
         FROM portfolios
         WHERE portfolio_id = ?1"
    )
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_by_account(pool: &SqlitePool, account_id: i64) -> Result<Vec<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT portfolio_id, value, account_id
         FROM portfolios
         WHERE account_id = ?1
         ORDER BY portfolio_id ASC"
    )
        .bind(account_id)
        .fetch_all(pool)
        .await
}

/// Inserts a portfolio with no value yet and returns its id.
pub async fn create<'e>(executor: impl SqliteExecutor<'e>, account_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO portfolios (value, account_id)
         VALUES (NULL, ?1)
         RETURNING portfolio_id"
    )
        .bind(account_id)
        .fetch_one(executor)
        .await
}

pub async fn set_value<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    value: f64,
) -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "UPDATE portfolios
         SET value = ?2
         WHERE portfolio_id = ?1
         RETURNING portfolio_id, value, account_id"
    )
        .bind(id)
        .bind(value)
        .fetch_one(executor)
        .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "DELETE FROM portfolios
         WHERE portfolio_id = ?1
         RETURNING portfolio_id, value, account_id"
    )
        .bind(id)
        .fetch_optional(pool)
        .await
}
