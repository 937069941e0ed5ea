//! Dashboard aggregation over already-fetched lists.

use rust_decimal::Decimal;

use crate::models::order::{Order, OrderStatus};
use crate::models::overview::OverviewResponse;
use crate::models::product::{Product, ProductKind};
use crate::models::user::User;

/// Derive the overview figures. Revenue counts completed orders only; a
/// pending or cancelled order contributes nothing until it completes.
pub fn build_overview(users: &[User], products: &[Product], orders: &[Order]) -> OverviewResponse {
    let total_plants = count_kind(products, ProductKind::Plant);
    let total_pots = count_kind(products, ProductKind::Pot);
    let total_accessories = count_kind(products, ProductKind::Accessory);

    let total_revenue: Decimal = orders
        .iter()
        .filter(|order| order.status == OrderStatus::Completed)
        .map(|order| order.total)
        .sum();

    OverviewResponse {
        total_users: users.len(),
        total_plants,
        total_pots,
        total_accessories,
        total_products: products.len(),
        total_orders: orders.len(),
        total_revenue,
        total_revenue_display: crate::services::money::format_vnd(total_revenue),
    }
}

fn count_kind(products: &[Product], kind: ProductKind) -> usize {
    products.iter().filter(|p| p.kind == kind).count()
}
