use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query parameters for the revenue lookup. Both dates are user-entered
/// `dd/mm/yyyy` strings; omitting both clears the filter and returns the
/// whole-dataset aggregate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueOrderSummary {
    pub id: String,
    pub full_name: String,
    pub total: Decimal,
    pub total_display: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueResponse {
    pub order_count: usize,
    pub orders: Vec<RevenueOrderSummary>,
    pub total: Decimal,
    pub total_display: String,
}
