use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A client whose holdings are tracked through investments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub investor_id: i64,
    pub name: String,
    pub date_of_birth: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestor {
    pub name: String,
    pub date_of_birth: String,
}

pub type UpdateInvestor = CreateInvestor;
