use axum::{Json, extract::State};

use crate::AppState;
use crate::handlers::respond::{ApiRejection, upstream_error};
use crate::models::overview::OverviewResponse;
use crate::services::stats;

/// Dashboard figures. The three upstream lists are independent, so they are
/// fetched concurrently and joined before aggregation.
pub async fn get_overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewResponse>, ApiRejection> {
    let (users, products, orders) = tokio::try_join!(
        state.store.fetch_users(),
        state.store.fetch_products(),
        state.store.fetch_orders(),
    )
    .map_err(upstream_error)?;

    Ok(Json(stats::build_overview(&users, &products, &orders)))
}
