use axum::{
    Json,
    extract::{Query, State},
};

use crate::AppState;
use crate::handlers::respond::{ApiRejection, bad_request, upstream_error};
use crate::models::revenue::{RevenueQuery, RevenueResponse};
use crate::services::revenue;

/// Date-bounded revenue lookup. The range is validated before any upstream
/// fetch; omitting both dates clears the filter and aggregates over every
/// completed order.
pub async fn query_revenue(
    State(state): State<AppState>,
    Query(params): Query<RevenueQuery>,
) -> Result<Json<RevenueResponse>, ApiRejection> {
    let range = match (&params.start, &params.end) {
        (None, None) => None,
        (start, end) => Some(
            revenue::parse_range(start.as_deref(), end.as_deref())
                .map_err(|e| bad_request(e.to_string()))?,
        ),
    };

    let orders = state.store.fetch_orders().await.map_err(upstream_error)?;

    let matching = revenue::completed_in_range(&orders, range);
    Ok(Json(revenue::build_response(matching)))
}
