use sqlx::SqlitePool;
use crate::models::{CreateInvestmentOption, Investment, InvestmentOption};

pub async fn fetch_investment(pool: &SqlitePool, reference_id: i64) -> Result<Option<Investment>, sqlx::Error> {
    sqlx::query_as::<_, Investment>(
        "SELECT reference_id, investor_id, holding, market_value
         FROM investments
         WHERE reference_id = ?1"
    )
        .bind(reference_id)
        .fetch_optional(pool)
        .await
}

pub async fn create_option(
    pool: &SqlitePool,
    input: CreateInvestmentOption,
) -> Result<InvestmentOption, sqlx::Error> {
    sqlx::query_as::<_, InvestmentOption>(
        "INSERT INTO investment_options (advisor_id, amount, inv_type, company_name)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING reference_id, advisor_id, amount, inv_type, company_name"
    )
        .bind(input.advisor_id)
        .bind(input.amount)
        .bind(input.inv_type)
        .bind(input.company)
        .fetch_one(pool)
        .await
}

pub async fn fetch_options_by_advisor(
    pool: &SqlitePool,
    advisor_id: i64,
) -> Result<Vec<InvestmentOption>, sqlx::Error> {
    sqlx::query_as::<_, InvestmentOption>(
        "SELECT reference_id, advisor_id, amount, inv_type, company_name
         FROM investment_options
         WHERE advisor_id = ?1
         ORDER BY reference_id ASC"
    )
        .bind(advisor_id)
        .fetch_all(pool)
        .await
}
