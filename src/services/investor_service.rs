use sqlx::SqlitePool;
use crate::db;
use crate::errors::AppError;
use crate::models::{CreateInvestor, Investor, UpdateInvestor};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Investor {} not found", id))
}

pub async fn create(pool: &SqlitePool, input: CreateInvestor) -> Result<Investor, AppError> {
    let investor = db::investor_queries::create(pool, input).await?;
    Ok(investor)
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Investor>, AppError> {
    let investors = db::investor_queries::fetch_all(pool).await?;
    Ok(investors)
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Investor, AppError> {
    db::investor_queries::fetch_one(pool, id).await?
        .ok_or_else(|| not_found(id))
}

pub async fn update(pool: &SqlitePool, id: i64, input: UpdateInvestor) -> Result<Investor, AppError> {
    db::investor_queries::update(pool, id, input).await?
        .ok_or_else(|| not_found(id))
}

/// Fails with a conflict while the investor still has investments.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Investor, AppError> {
    db::investor_queries::delete(pool, id).await?
        .ok_or_else(|| not_found(id))
}
