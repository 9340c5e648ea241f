use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Asset class of a portfolio holding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(rename_all = "snake_case")]
pub enum AssetClass {
    #[serde(rename = "bond")]
    Bond,

    #[serde(rename = "canadian_equity")]
    CanadianEquity,

    #[serde(rename = "us_equity")]
    UsEquity,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Bond => write!(f, "bond"),
            AssetClass::CanadianEquity => write!(f, "canadian_equity"),
            AssetClass::UsEquity => write!(f, "us_equity"),
        }
    }
}

// One allocation inside a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub holding_id: i64,
    pub portfolio_id: i64,
    pub asset_class: AssetClass,
    pub amount: f64,
}
