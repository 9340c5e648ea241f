use sqlx::SqlitePool;
use crate::models::{Company, CreateCompany, UpdateCompany};

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "SELECT company_name, industry, shares_outstanding, market_cap
         FROM companies
         ORDER BY company_name ASC"
    )
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &SqlitePool, name: &str) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "SELECT company_name, industry, shares_outstanding, market_cap
         FROM companies
         WHERE company_name = ?1"
    )
        .bind(name)
        .fetch_optional(pool)
        .await
}

pub async fn exists(pool: &SqlitePool, name: &str) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM companies WHERE company_name = ?1")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create(pool: &SqlitePool, input: CreateCompany) -> Result<Company, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "INSERT INTO companies (company_name, industry, shares_outstanding, market_cap)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING company_name, industry, shares_outstanding, market_cap"
    )
        .bind(input.company_name)
        .bind(input.industry)
        .bind(input.shares_outstanding)
        .bind(input.market_cap)
        .fetch_one(pool)
        .await
}

/// Updates every column, the name included. Renames cascade to investment options.
pub async fn update(
    pool: &SqlitePool,
    name: &str,
    input: UpdateCompany,
) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "UPDATE companies
         SET company_name = ?2, industry = ?3, shares_outstanding = ?4, market_cap = ?5
         WHERE company_name = ?1
         RETURNING company_name, industry, shares_outstanding, market_cap"
    )
        .bind(name)
        .bind(input.company_name)
        .bind(input.industry)
        .bind(input.shares_outstanding)
        .bind(input.market_cap)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, name: &str) -> Result<Option<Company>, sqlx::Error> {
    sqlx::query_as::<_, Company>(
        "DELETE FROM companies
         WHERE company_name = ?1
         RETURNING company_name, industry, shares_outstanding, market_cap"
    )
        .bind(name)
        .fetch_optional(pool)
        .await
}
