use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreateInvestmentOption, Investment, InvestmentOption};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/investment", post(create_investment_option))
        .route("/investment/:reference_id", get(get_investment))
        .route("/investment/options/:advisor_id", get(list_investment_options))
}

pub async fn get_investment(
    State(state): State<AppState>,
    ApiPath(reference_id): ApiPath<i64>,
) -> Result<Json<Investment>, AppError> {
    info!("GET /investment/{} - Fetching investment", reference_id);
    let investment = services::investment_service::fetch_investment(&state.pool, reference_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investment {}: {}", reference_id, e);
            e
        })?;
    Ok(Json(investment))
}

pub async fn create_investment_option(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateInvestmentOption>,
) -> Result<Json<InvestmentOption>, AppError> {
    info!("POST /investment - Creating investment option for advisor {}", data.advisor_id);
    let option = services::investment_service::create_option(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create investment option: {}", e);
            e
        })?;
    Ok(Json(option))
}

pub async fn list_investment_options(
    State(state): State<AppState>,
    ApiPath(advisor_id): ApiPath<i64>,
) -> Result<Json<Vec<InvestmentOption>>, AppError> {
    info!("GET /investment/options/{} - Fetching investment options", advisor_id);
    let options = services::investment_service::fetch_options(&state.pool, advisor_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investment options for advisor {}: {}", advisor_id, e);
            e
        })?;
    Ok(Json(options))
}
