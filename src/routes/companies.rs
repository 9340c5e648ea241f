use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::{Company, CreateCompany, UpdateCompany};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/company", get(list_companies).post(create_company))
        .route(
            "/company/:name",
            get(get_company).put(update_company).delete(delete_company),
        )
}

pub async fn create_company(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<CreateCompany>,
) -> Result<Json<Company>, AppError> {
    info!("POST /company - Creating company {}", data.company_name);
    let company = services::company_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create company: {}", e);
            e
        })?;
    Ok(Json(company))
}

pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<Company>>, AppError> {
    info!("GET /company - Fetching all companies");
    let companies = services::company_service::fetch_all(&state.pool)
        .await
        .map_err(|e| {
            error!("Failed to fetch companies: {}", e);
            e
        })?;
    Ok(Json(companies))
}

pub async fn get_company(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<Company>, AppError> {
    info!("GET /company/{} - Fetching company", name);
    let company = services::company_service::fetch_one(&state.pool, &name)
        .await
        .map_err(|e| {
            error!("Failed to fetch company {}: {}", name, e);
            e
        })?;
    Ok(Json(company))
}

pub async fn update_company(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
    ApiJson(data): ApiJson<UpdateCompany>,
) -> Result<Json<Company>, AppError> {
    info!("PUT /company/{} - Updating company", name);
    let company = services::company_service::update(&state.pool, &name, data)
        .await
        .map_err(|e| {
            error!("Failed to update company {}: {}", name, e);
            e
        })?;
    Ok(Json(company))
}

pub async fn delete_company(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<Company>, AppError> {
    info!("DELETE /company/{} - Deleting company", name);
    let company = services::company_service::delete(&state.pool, &name)
        .await
        .map_err(|e| {
            error!("Failed to delete company {}: {}", name, e);
            e
        })?;
    Ok(Json(company))
}
