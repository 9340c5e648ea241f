use sqlx::SqlitePool;
use crate::db;
use crate::errors::AppError;
use crate::models::{CreateInvestmentOption, Investment, InvestmentOption};

pub async fn fetch_investment(pool: &SqlitePool, reference_id: i64) -> Result<Investment, AppError> {
    db::investment_queries::fetch_investment(pool, reference_id).await?
        .ok_or_else(|| AppError::NotFound(format!("Investment {} not found", reference_id)))
}

/// The advisor and company must already exist.
pub async fn create_option(
    pool: &SqlitePool,
    input: CreateInvestmentOption,
) -> Result<InvestmentOption, AppError> {
    if input.inv_type.trim().is_empty() {
        return Err(AppError::Validation("Investment type cannot be empty".into()));
    }
    if !db::advisor_queries::exists(pool, input.advisor_id).await? {
        return Err(AppError::Validation(format!("Advisor {} does not exist", input.advisor_id)));
    }
    if !db::company_queries::exists(pool, &input.company).await? {
        return Err(AppError::Validation(format!("Company {} does not exist", input.company)));
    }

    let option = db::investment_queries::create_option(pool, input).await?;
    Ok(option)
}

/// Empty when the advisor offers nothing, or is unknown.
pub async fn fetch_options(pool: &SqlitePool, advisor_id: i64) -> Result<Vec<InvestmentOption>, AppError> {
    let options = db::investment_queries::fetch_options_by_advisor(pool, advisor_id).await?;
    Ok(options)
}
