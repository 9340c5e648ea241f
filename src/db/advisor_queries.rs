use sqlx::{SqliteExecutor, SqlitePool};
use crate::models::{Advisor, AdvisorQualification};

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Advisor>, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(
        "SELECT advisor_id, name, username
         FROM advisors
         ORDER BY advisor_id ASC"
    )
        .fetch_all(pool)
        .await
}

pub async fn fetch_one<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<Option<Advisor>, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(
        "SELECT advisor_id, name, username
         FROM advisors
         WHERE advisor_id = ?1"
    )
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM advisors WHERE advisor_id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

pub async fn create<'e>(
    executor: impl SqliteExecutor<'e>,
    name: &str,
    username: &str,
    password: &str,
) -> Result<Advisor, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(
        "INSERT INTO advisors (name, username, password)
         VALUES (?1, ?2, ?3)
         RETURNING advisor_id, name, username"
    )
        .bind(name)
        .bind(username)
        .bind(password)
        .fetch_one(executor)
        .await
}

pub async fn delete<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> Result<Option<Advisor>, sqlx::Error> {
    sqlx::query_as::<_, Advisor>(
        "DELETE FROM advisors
         WHERE advisor_id = ?1
         RETURNING advisor_id, name, username"
    )
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// `INSERT OR IGNORE` so a repeated qualification in one request is a no-op.
pub async fn add_qualification<'e>(
    executor: impl SqliteExecutor<'e>,
    advisor_id: i64,
    qualification: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO advisor_qualifications (advisor_id, qualification)
         VALUES (?1, ?2)"
    )
        .bind(advisor_id)
        .bind(qualification)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn fetch_qualifications<'e>(
    executor: impl SqliteExecutor<'e>,
    advisor_id: i64,
) -> Result<Vec<AdvisorQualification>, sqlx::Error> {
    sqlx::query_as::<_, AdvisorQualification>(
        "SELECT advisor_id, qualification
         FROM advisor_qualifications
         WHERE advisor_id = ?1
         ORDER BY qualification ASC"
    )
        .bind(advisor_id)
        .fetch_all(executor)
        .await
}

pub async fn fetch_all_qualifications(pool: &SqlitePool) -> Result<Vec<AdvisorQualification>, sqlx::Error> {
    sqlx::query_as::<_, AdvisorQualification>(
        "SELECT advisor_id, qualification
         FROM advisor_qualifications
         ORDER BY advisor_id ASC, qualification ASC"
    )
        .fetch_all(pool)
        .await
}
