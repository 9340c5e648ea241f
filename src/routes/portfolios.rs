use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreatePortfolio, Holding, Portfolio};
use crate::services;
use crate::state::AppState;

/// `/portfolio/{key}` addresses a single portfolio as `id:<n>` and an
/// account's portfolios as a bare `<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioKey {
    Id(i64),
    Account(i64),
}

impl PortfolioKey {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let (number, key): (&str, fn(i64) -> PortfolioKey) = match raw.strip_prefix("id:") {
            Some(rest) => (rest, PortfolioKey::Id),
            None => (raw, PortfolioKey::Account),
        };
        number
            .parse::<i64>()
            .map(key)
            .map_err(|_| AppError::Validation(format!("Invalid portfolio key: {}", raw)))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolio", post(create_portfolio))
        .route("/portfolio/:key", get(get_portfolio).delete(delete_portfolio))
        .route("/portfolio/:key/holdings", get(get_holdings))
}

pub async fn create_portfolio(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreatePortfolio>,
) -> Result<Json<Portfolio>, AppError> {
    info!("POST /portfolio - Creating portfolio for account {}", data.account_id);
    let portfolio = services::portfolio_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;
    Ok(Json(portfolio))
}

/// Either one portfolio or the account's list, depending on the key.
pub async fn get_portfolio(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<Response, AppError> {
    info!("GET /portfolio/{} - Fetching portfolio", key);
    let response = match PortfolioKey::parse(&key)? {
        PortfolioKey::Id(id) => services::portfolio_service::fetch_one(&state.pool, id)
            .await
            .map(|p| Json(p).into_response()),
        PortfolioKey::Account(account_id) => {
            services::portfolio_service::fetch_by_account(&state.pool, account_id)
                .await
                .map(|ps| Json(ps).into_response())
        }
    };
    response.map_err(|e| {
        error!("Failed to fetch portfolio {}: {}", key, e);
        e
    })
}

pub async fn get_holdings(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
) -> Result<Json<Vec<Holding>>, AppError> {
    info!("GET /portfolio/{}/holdings - Fetching holdings", key);
    let id = match PortfolioKey::parse(&key)? {
        PortfolioKey::Id(id) => id,
        PortfolioKey::Account(_) => {
            return Err(AppError::Validation(format!(
                "Holdings are addressed by portfolio id (id:<n>), got {}",
                key
            )));
        }
    };
    let holdings = services::portfolio_service::fetch_holdings(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch holdings for portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(holdings))
}

pub async fn delete_portfolio(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Portfolio>, AppError> {
    info!("DELETE /portfolio/{} - Deleting portfolio", id);
    let portfolio = services::portfolio_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete portfolio {}: {}", id, e);
            e
        })?;
    Ok(Json(portfolio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_portfolio_id() {
        assert_eq!(PortfolioKey::parse("id:42").unwrap(), PortfolioKey::Id(42));
    }

    #[test]
    fn test_parse_account_id() {
        assert_eq!(PortfolioKey::parse("7").unwrap(), PortfolioKey::Account(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(PortfolioKey::parse("id:").is_err());
        assert!(PortfolioKey::parse("abc").is_err());
    }
}
