use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// An investor's actual position. There is no way to create one over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub reference_id: i64,
    pub investor_id: i64,
    pub holding: String,
    pub market_value: f64,
}

/// Something an advisor offers to invest in, tied to a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOption {
    pub reference_id: i64,
    pub advisor_id: i64,
    pub amount: i64,
    pub inv_type: String,
    #[sqlx(rename = "company_name")]
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvestmentOption {
    pub advisor_id: i64,
    pub amount: i64,
    pub inv_type: String,
    pub company: String,
}
