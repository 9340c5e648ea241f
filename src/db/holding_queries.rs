use sqlx::{SqliteExecutor, SqlitePool};
use crate::models::{AssetClass, Holding};

pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    portfolio_id: i64,
    asset_class: AssetClass,
    amount: f64,
) -> Result<Holding, sqlx::Error> {
    sqlx::query_as::<_, Holding>(
        "INSERT INTO portfolio_holdings (portfolio_id, asset_class, amount)
         VALUES (?1, ?2, ?3)
         RETURNING holding_id, portfolio_id, asset_class, amount"
    )
        .bind(portfolio_id)
        .bind(asset_class)
        .bind(amount)
        .fetch_one(executor)
        .await
}

pub async fn fetch_by_portfolio(pool: &SqlitePool, portfolio_id: i64) -> Result<Vec<Holding>, sqlx::Error> {
    sqlx::query_as::<_, Holding>(
        "SELECT holding_id, portfolio_id, asset_class, amount
         FROM portfolio_holdings
         WHERE portfolio_id = ?1
         ORDER BY holding_id ASC"
    )
        .bind(portfolio_id)
        .fetch_all(pool)
        .await
}
