use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Keyed by its name rather than a surrogate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_name: String,
    pub industry: String,
    pub shares_outstanding: i64,
    pub market_cap: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompany {
    pub company_name: String,
    pub industry: String,
    pub shares_outstanding: i64,
    pub market_cap: i64,
}

pub type UpdateCompany = CreateCompany;
