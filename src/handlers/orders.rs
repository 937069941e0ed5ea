use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::AppState;
use crate::handlers::respond::{ApiRejection, conflict, not_found, upstream_error};
use crate::models::order::{CompleteOrderResponse, Order, OrderListResponse, OrderStatus, OrderView};
use crate::services::orders;

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    /// Case-insensitive search over order id, user id, phone, and address.
    pub q: Option<String>,
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderListQuery>,
) -> Result<Json<OrderListResponse>, ApiRejection> {
    let all = state.store.fetch_orders().await.map_err(upstream_error)?;

    let matching = orders::filter_orders(&all, params.q.as_deref().unwrap_or(""));
    let views: Vec<OrderView> = matching.into_iter().cloned().map(OrderView::from).collect();

    Ok(Json(OrderListResponse {
        count: views.len(),
        orders: views,
    }))
}

/// Move a pending order to completed. The transition rule is checked on the
/// freshly fetched record before anything is written; the write itself is a
/// full-record replace with only `status` changed. Either step failing
/// aborts the transition.
pub async fn complete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompleteOrderResponse>, ApiRejection> {
    let record = state
        .store
        .fetch_order_raw(&id)
        .await
        .map_err(upstream_error)?
        .ok_or_else(|| not_found("Không tìm thấy đơn hàng."))?;

    let order = Order::from_value(&record)
        .ok_or_else(|| upstream_error(format!("unrecognized order record {id}").into()))?;

    orders::ensure_completable(&order).map_err(|e| conflict(e.to_string()))?;

    let updated = orders::with_status(record, OrderStatus::Completed);
    state
        .store
        .replace_order(&id, &updated)
        .await
        .map_err(upstream_error)?;

    tracing::info!("Order {} moved to completed", id);

    Ok(Json(CompleteOrderResponse {
        id,
        status: OrderStatus::Completed,
        status_label: OrderStatus::Completed.label(),
    }))
}
