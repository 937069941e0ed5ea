use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use crate::AppState;
use crate::handlers::respond::{ApiRejection, bad_request, not_found, upstream_error};
use crate::models::product::{
    DeleteProductResponse, ProductKind, ProductListResponse, ProductPayload,
};
use crate::services::catalog;

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    /// Category bucket: plant, pot (or plantpot), accessory.
    pub kind: Option<String>,
    /// Case-insensitive name search.
    pub q: Option<String>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Result<Json<ProductListResponse>, ApiRejection> {
    let kind = match params.kind.as_deref() {
        None => None,
        Some(raw) => Some(
            ProductKind::from_raw(raw)
                .ok_or_else(|| bad_request(format!("Loại sản phẩm không hợp lệ: {raw}")))?,
        ),
    };

    let products = state.store.fetch_products().await.map_err(upstream_error)?;

    let bucket = catalog::products_of_kind(&products, kind);
    let filtered = catalog::filter_products(bucket, params.q.as_deref().unwrap_or(""));

    Ok(Json(ProductListResponse {
        count: filtered.len(),
        products: filtered.into_iter().cloned().collect(),
    }))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Value>), ApiRejection> {
    catalog::validate_payload(&payload).map_err(|e| bad_request(e.to_string()))?;

    let record = catalog::to_store_record(&payload, None);
    let created = state
        .store
        .create_product(&record)
        .await
        .map_err(upstream_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Value>, ApiRejection> {
    catalog::validate_payload(&payload).map_err(|e| bad_request(e.to_string()))?;

    // Full-record replace; the id rides along in the body as the store
    // backend expects.
    let record = catalog::to_store_record(&payload, Some(id.clone()));
    let updated = state
        .store
        .update_product(&id, &record)
        .await
        .map_err(upstream_error)?
        .ok_or_else(|| not_found("Không tìm thấy sản phẩm."))?;

    Ok(Json(updated))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProductResponse>, ApiRejection> {
    let deleted = state
        .store
        .delete_product(&id)
        .await
        .map_err(upstream_error)?;

    if !deleted {
        return Err(not_found("Không tìm thấy sản phẩm."));
    }

    Ok(Json(DeleteProductResponse { id, deleted: true }))
}
