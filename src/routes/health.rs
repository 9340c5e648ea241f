use axum::{
    extract::State,
    Router,
    routing::get,
};
use tracing::{error, info};

use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

/// Reports OK once the database answers a trivial query.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    info!("GET /health - Health check");
    sqlx::query("SELECT 1")
        .execute(&state.pool)
        .await
        .map_err(|e| {
            error!("Health check failed: {}", e);
            AppError::Db(e)
        })?;
    Ok("OK")
}
