use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Advisor as returned by the API.
///
/// The stored password is never selected into this struct, so no response
/// ever carries it. `qualifications`
/// lives in its own table and is filled in by the service layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Advisor {
    pub advisor_id: i64,
    pub name: String,
    pub username: String,
    #[sqlx(skip)]
    pub qualifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorQualification {
    pub advisor_id: i64,
    pub qualification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdvisor {
    pub name: String,
    pub username: String,
    pub password: String,
    pub qualifications: Vec<String>,
}
