use std::collections::HashMap;

use sqlx::SqlitePool;
use tracing::{info, warn};
use crate::db;
use crate::errors::AppError;
use crate::models::{Advisor, AdvisorQualification, CreateAdvisor, Investor};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Advisor {} not found", id))
}

/// Creates the advisor and its qualifications in one transaction.
///
/// A taken username is a conflict and nothing is written.
pub async fn create(pool: &SqlitePool, input: CreateAdvisor) -> Result<Advisor, AppError> {
    if input.username.trim().is_empty() {
        return Err(AppError::Validation("Username cannot be empty".into()));
    }

    let mut tx = pool.begin().await?;

    let mut advisor = db::advisor_queries::create(
        &mut *tx,
        &input.name,
        &input.username,
        &input.password,
    )
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict(_) => {
                warn!("Username {} is already taken", input.username);
                AppError::Conflict(format!("Username {} is already taken", input.username))
            }
            other => other,
        })?;

    for qualification in &input.qualifications {
        db::advisor_queries::add_qualification(&mut *tx, advisor.advisor_id, qualification).await?;
    }

    advisor.qualifications = db::advisor_queries::fetch_qualifications(&mut *tx, advisor.advisor_id)
        .await?
        .into_iter()
        .map(|q| q.qualification)
        .collect();

    tx.commit().await?;

    info!(
        "Created advisor {} with {} qualifications",
        advisor.advisor_id,
        advisor.qualifications.len()
    );
    Ok(advisor)
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Advisor, AppError> {
    let mut advisor = db::advisor_queries::fetch_one(pool, id).await?
        .ok_or_else(|| not_found(id))?;
    advisor.qualifications = fetch_qualifications(pool, id).await?;
    Ok(advisor)
}

pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Advisor>, AppError> {
    let mut advisors = db::advisor_queries::fetch_all(pool).await?;
    let qualifications = db::advisor_queries::fetch_all_qualifications(pool).await?;
    attach_qualifications(&mut advisors, qualifications);
    Ok(advisors)
}

pub async fn fetch_qualifications(pool: &SqlitePool, id: i64) -> Result<Vec<String>, AppError> {
    let rows = db::advisor_queries::fetch_qualifications(pool, id).await?;
    if rows.is_empty() && !db::advisor_queries::exists(pool, id).await? {
        return Err(not_found(id));
    }
    Ok(rows.into_iter().map(|q| q.qualification).collect())
}

/// There is no stored association between advisors and investors yet.
pub async fn fetch_advised_investors(pool: &SqlitePool, id: i64) -> Result<Vec<Investor>, AppError> {
    if !db::advisor_queries::exists(pool, id).await? {
        return Err(not_found(id));
    }
    Err(AppError::NotImplemented(
        "Advisor to investor association is not recorded".into(),
    ))
}

/// Qualifications go with the advisor. Fails with a conflict while the
/// advisor still offers investment options.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Advisor, AppError> {
    let mut tx = pool.begin().await?;

    let qualifications = db::advisor_queries::fetch_qualifications(&mut *tx, id).await?;
    let mut advisor = db::advisor_queries::delete(&mut *tx, id).await?
        .ok_or_else(|| not_found(id))?;
    advisor.qualifications = qualifications.into_iter().map(|q| q.qualification).collect();

    tx.commit().await?;
    Ok(advisor)
}

fn attach_qualifications(advisors: &mut [Advisor], rows: Vec<AdvisorQualification>) {
    let mut by_advisor: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        by_advisor.entry(row.advisor_id).or_default().push(row.qualification);
    }
    for advisor in advisors.iter_mut() {
        advisor.qualifications = by_advisor.remove(&advisor.advisor_id).unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor(id: i64) -> Advisor {
        Advisor {
            advisor_id: id,
            name: format!("Advisor {}", id),
            username: format!("user{}", id),
            qualifications: Vec::new(),
        }
    }

    fn qualification(advisor_id: i64, q: &str) -> AdvisorQualification {
        AdvisorQualification { advisor_id, qualification: q.into() }
    }

    #[test]
    fn test_attach_qualifications_groups_by_advisor() {
        let mut advisors = vec![advisor(1), advisor(2), advisor(3)];
        let rows = vec![
            qualification(1, "CFA"),
            qualification(1, "CFP"),
            qualification(3, "CIM"),
        ];
        attach_qualifications(&mut advisors, rows);

        assert_eq!(advisors[0].qualifications, vec!["CFA", "CFP"]);
        assert!(advisors[1].qualifications.is_empty());
        assert_eq!(advisors[2].qualifications, vec!["CIM"]);
    }
}
