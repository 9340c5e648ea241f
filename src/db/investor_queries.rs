use sqlx::SqlitePool;
use crate::models::{CreateInvestor, Investor, UpdateInvestor};

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "SELECT investor_id, name, date_of_birth
         FROM investors
         ORDER BY investor_id ASC"
    )
        .fetch_all(pool)
        .await
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Option<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "SELECT investor_id, name, date_of_birth
         FROM investors
         WHERE investor_id = ?1"
    )
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &SqlitePool, input: CreateInvestor) -> Result<Investor, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "INSERT INTO investors (name, date_of_birth)
         VALUES (?1, ?2)
         RETURNING investor_id, name, date_of_birth"
    )
        .bind(input.name)
        .bind(input.date_of_birth)
        .fetch_one(pool)
        .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: UpdateInvestor,
) -> Result<Option<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "UPDATE investors
         SET name = ?2, date_of_birth = ?3
         WHERE investor_id = ?1
         RETURNING investor_id, name, date_of_birth"
    )
        .bind(id)
        .bind(input.name)
        .bind(input.date_of_birth)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Investor>, sqlx::Error> {
    sqlx::query_as::<_, Investor>(
        "DELETE FROM investors
         WHERE investor_id = ?1
         RETURNING investor_id, name, date_of_birth"
    )
        .bind(id)
        .fetch_optional(pool)
        .await
}
