use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dashboard figures derived from the already-fetched user, product, and
/// order lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub total_users: usize,
    pub total_plants: usize,
    pub total_pots: usize,
    pub total_accessories: usize,
    pub total_products: usize,
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub total_revenue_display: String,
}
