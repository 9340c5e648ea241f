use sqlx::SqlitePool;

/// Shared by every handler. Built once in `main`, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
