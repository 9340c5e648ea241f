use sqlx::SqlitePool;
use crate::db;
use crate::errors::AppError;
use crate::models::{Company, CreateCompany, UpdateCompany};

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Company {} not found", name))
}

fn validate(input: &CreateCompany) -> Result<(), AppError> {
    if input.company_name.trim().is_empty() {
        return Err(AppError::Validation("Company name cannot be empty".into()));
    }
    Ok(())
}

pub async fn create(pool: &SqlitePool, input: CreateCompany) -> Result<Company, AppError> {
    validate(&input)?;
    let company = db::company_queries::create(pool, input).await?;
    Ok(company)
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Company>, AppError> {
    let companies = db::company_queries::fetch_all(pool).await?;
    Ok(companies)
}

pub async fn fetch_one(pool: &SqlitePool, name: &str) -> Result<Company, AppError> {
    db::company_queries::fetch_one(pool, name).await?
        .ok_or_else(|| not_found(name))
}

pub async fn update(pool: &SqlitePool, name: &str, input: UpdateCompany) -> Result<Company, AppError> {
    validate(&input)?;
    db::company_queries::update(pool, name, input).await?
        .ok_or_else(|| not_found(name))
}

pub async fn delete(pool: &SqlitePool, name: &str) -> Result<Company, AppError> {
    db::company_queries::delete(pool, name).await?
        .ok_or_else(|| not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_company_name_rejected() {
        let input = CreateCompany {
            company_name: "  ".into(),
            industry: "Energy".into(),
            shares_outstanding: 10,
            market_cap: 100,
        };
        assert!(matches!(validate(&input), Err(AppError::Validation(_))));
    }
}
