use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A set of holdings belonging to one account.
///
/// `value` is the sum of the holding amounts submitted when the portfolio was
/// created. It is only `None` while the creating transaction is in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub portfolio_id: i64,
    pub value: Option<f64>,
    pub account_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolio {
    pub account_id: i64,
    pub bonds: Vec<f64>,
    pub canadian_equities: Vec<f64>,
    pub us_equities: Vec<f64>,
}

impl CreatePortfolio {
    /// Holding amounts tagged with their asset class, bonds first.
    pub fn holdings(&self) -> impl Iterator<Item = (super::AssetClass, f64)> + '_ {
        use super::AssetClass;

        self.bonds
            .iter()
            .map(|a| (AssetClass::Bond, *a))
            .chain(self.canadian_equities.iter().map(|a| (AssetClass::CanadianEquity, *a)))
            .chain(self.us_equities.iter().map(|a| (AssetClass::UsEquity, *a)))
    }
}
