use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{CreateInvestor, Investor, UpdateInvestor};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/investor", get(list_investors).post(create_investor))
        .route(
            "/investor/:id",
            get(get_investor).put(update_investor).delete(delete_investor),
        )
}

pub async fn create_investor(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateInvestor>,
) -> Result<Json<Investor>, AppError> {
    info!("POST /investor - Creating investor");
    let investor = services::investor_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create investor: {}", e);
            e
        })?;
    Ok(Json(investor))
}

pub async fn list_investors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Investor>>, AppError> {
    info!("GET /investor - Fetching all investors");
    let investors = services::investor_service::fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch investors: {}", e);
            e
        })?;
    Ok(Json(investors))
}

pub async fn get_investor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Investor>, AppError> {
    info!("GET /investor/{} - Fetching investor", id);
    let investor = services::investor_service::fetch_one(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investor {}: {}", id, e);
            e
        })?;
    Ok(Json(investor))
}

pub async fn update_investor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(data): ApiJson<UpdateInvestor>,
) -> Result<Json<Investor>, AppError> {
    info!("PUT /investor/{} - Updating investor", id);
    let investor = services::investor_service::update(&state.pool, id, data)
        .await
        .map_err(|e| {
            error!("Failed to update investor {}: {}", id, e);
            e
        })?;
    Ok(Json(investor))
}

pub async fn delete_investor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Investor>, AppError> {
    info!("DELETE /investor/{} - Deleting investor", id);
    let investor = services::investor_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete investor {}: {}", id, e);
            e
        })?;
    Ok(Json(investor))
}
