use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Advisor, CreateAdvisor, Investor};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advisor", get(list_advisors).post(create_advisor))
        .route("/advisor/:id", get(get_advisor).delete(delete_advisor))
        .route("/advisor/:id/qualifications", get(get_qualifications))
        .route("/advisors/:id/investors", get(get_advised_investors))
}

pub async fn create_advisor(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateAdvisor>,
) -> Result<Json<Advisor>, AppError> {
    info!("POST /advisor - Creating advisor {}", data.username);
    let advisor = services::advisor_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create advisor: {}", e);
            e
        })?;
    Ok(Json(advisor))
}

pub async fn list_advisors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Advisor>>, AppError> {
    info!("GET /advisor - Fetching all advisors");
    let advisors = services::advisor_service::fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch advisors: {}", e);
            e
        })?;
    Ok(Json(advisors))
}

pub async fn get_advisor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Advisor>, AppError> {
    info!("GET /advisor/{} - Fetching advisor", id);
    let advisor = services::advisor_service::fetch_one(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch advisor {}: {}", id, e);
            e
        })?;
    Ok(Json(advisor))
}

pub async fn get_qualifications(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<String>>, AppError> {
    info!("GET /advisor/{}/qualifications - Fetching qualifications", id);
    let qualifications = services::advisor_service::fetch_qualifications(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch qualifications for advisor {}: {}", id, e);
            e
        })?;
    Ok(Json(qualifications))
}

pub async fn get_advised_investors(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Vec<Investor>>, AppError> {
    info!("GET /advisors/{}/investors - Fetching advised investors", id);
    let investors = services::advisor_service::fetch_advised_investors(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investors for advisor {}: {}", id, e);
            e
        })?;
    Ok(Json(investors))
}

pub async fn delete_advisor(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Advisor>, AppError> {
    info!("DELETE /advisor/{} - Deleting advisor", id);
    let advisor = services::advisor_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete advisor {}: {}", id, e);
            e
        })?;
    Ok(Json(advisor))
}
