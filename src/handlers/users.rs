use axum::{Json, extract::State};

use crate::AppState;
use crate::handlers::respond::{ApiRejection, upstream_error};
use crate::models::user::UserListResponse;

/// Users are read-only in the admin surface; this is a straight listing.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, ApiRejection> {
    let users = state.store.fetch_users().await.map_err(upstream_error)?;

    Ok(Json(UserListResponse {
        count: users.len(),
        users,
    }))
}
