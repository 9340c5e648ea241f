use sqlx::SqlitePool;
use tracing::info;
use crate::db;
use crate::errors::AppError;
use crate::models::{CreatePortfolio, Holding, Portfolio};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Portfolio {} not found", id))
}

/// Sum of every submitted holding amount.
pub fn total_value(input: &CreatePortfolio) -> f64 {
    input.holdings().map(|(_, amount)| amount).sum()
}

fn validate(input: &CreatePortfolio) -> Result<(), AppError> {
    if let Some((class, amount)) = input.holdings().find(|(_, a)| !a.is_finite()) {
        return Err(AppError::Validation(format!(
            "Holding amount {} for {} is not a finite number",
            amount, class
        )));
    }
    if !total_value(input).is_finite() {
        return Err(AppError::Validation(
            "Sum of holding amounts is not a finite number".into(),
        ));
    }
    Ok(())
}

/// Creates the portfolio, its holdings and its value in one transaction.
pub async fn create(pool: &SqlitePool, input: CreatePortfolio) -> Result<Portfolio, AppError> {
    validate(&input)?;

    let mut tx = pool.begin().await?;

    let portfolio_id = db::portfolio_queries::create(&mut *tx, input.account_id).await?;

    let mut total = 0.0;
    for (asset_class, amount) in input.holdings() {
        db::holding_queries::create(&mut *tx, portfolio_id, asset_class, amount).await?;
        total += amount;
    }

    let portfolio = db::portfolio_queries::set_value(&mut *tx, portfolio_id, total).await?;
    tx.commit().await?;

    info!(
        "Created portfolio {} for account {} with value {}",
        portfolio.portfolio_id, portfolio.account_id, total
    );
    Ok(portfolio)
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Portfolio, AppError> {
    db::portfolio_queries::fetch_one(pool, id).await?
        .ok_or_else(|| not_found(id))
}

pub async fn fetch_by_account(pool: &SqlitePool, account_id: i64) -> Result<Vec<Portfolio>, AppError> {
    let portfolios = db::portfolio_queries::fetch_by_account(pool, account_id).await?;
    Ok(portfolios)
}

pub async fn fetch_holdings(pool: &SqlitePool, id: i64) -> Result<Vec<Holding>, AppError> {
    fetch_one(pool, id).await?;
    let holdings = db::holding_queries::fetch_by_portfolio(pool, id).await?;
    Ok(holdings)
}

/// Holdings are removed along with the portfolio.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Portfolio, AppError> {
    db::portfolio_queries::delete(pool, id).await?
        .ok_or_else(|| not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(bonds: Vec<f64>, canadian: Vec<f64>, us: Vec<f64>) -> CreatePortfolio {
        CreatePortfolio {
            account_id: 1,
            bonds,
            canadian_equities: canadian,
            us_equities: us,
        }
    }

    #[test]
    fn test_total_value_sums_all_classes() {
        let input = request(vec![10.0, 5.0], vec![20.0], vec![]);
        assert_eq!(total_value(&input), 35.0);
    }

    #[test]
    fn test_total_value_empty() {
        assert_eq!(total_value(&request(vec![], vec![], vec![])), 0.0);
    }

    #[test]
    fn test_non_finite_amount_rejected() {
        let input = request(vec![1.0], vec![], vec![f64::NAN]);
        assert!(matches!(validate(&input), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let input = request(vec![1e308, 1e308], vec![], vec![]);
        assert!(matches!(validate(&input), Err(AppError::Validation(_))));
    }
}
